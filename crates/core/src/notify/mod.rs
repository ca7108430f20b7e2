//! Alert delivery - rendering volume reports and posting them to a Slack
//! incoming webhook.

mod notify_model;
mod notify_service;

pub use notify_model::{SlackAttachment, SlackField, SlackMessage};
pub use notify_service::{NotifierTrait, SlackNotifier};

#[cfg(test)]
mod notify_service_tests;
