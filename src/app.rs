use anyhow::{anyhow, Result};
use chrono::Utc;

use crate::{
    cli::{Cli, Command},
    domain::{self, message::Message},
    infra, store,
    usecases::{
        self,
        delete_message::{delete_message, DeleteMessageCommand, DeleteMessageError},
        list_contacts::{list_contacts, ListContactsError, ListContactsQuery},
        open_conversation::{open_conversation, OpenConversationError, OpenConversationQuery},
        send_message::{send_message, SendMessageCommand, SendMessageError},
    },
};

pub fn run(cli: Cli) -> Result<()> {
    let context = usecases::bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        domain = domain::module_name(),
        usecases = usecases::module_name(),
        store = store::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command {
        Command::Send { from, to, text } => {
            let sent = send_message(
                &context.store,
                SendMessageCommand {
                    sender: from.clone(),
                    recipient: to.clone(),
                    text,
                    timestamp_ms: Utc::now().timestamp_millis(),
                },
            )
            .map_err(describe_send_error)?;

            tracing::info!(from = %from, to = %to, timestamp_ms = sent.timestamp, "message sent");
            println!("Sent to {to} at {}.", sent.timestamp);
        }
        Command::Open { user, peer } => {
            let output = open_conversation(
                &context.store,
                OpenConversationQuery {
                    user: user.clone(),
                    peer: peer.clone(),
                },
            )
            .map_err(describe_open_error)?;

            if output.messages.is_empty() {
                println!("No messages with {peer} yet.");
            } else {
                for message in &output.messages {
                    println!("[{}] {}: {}", message.timestamp, message.sender, message.text);
                }
            }
        }
        Command::Delete {
            user,
            peer,
            sender,
            text,
            timestamp,
        } => {
            delete_message(
                &context.store,
                DeleteMessageCommand {
                    user,
                    peer,
                    message: Message::new(sender, text, timestamp),
                },
            )
            .map_err(describe_delete_error)?;

            println!("Message deleted.");
        }
        Command::Contacts { user } => {
            let output = list_contacts(&context.store, ListContactsQuery { user: user.clone() })
                .map_err(describe_contacts_error)?;

            if output.contacts.is_empty() {
                println!("No conversations for {user} yet.");
            } else {
                for contact in &output.contacts {
                    let badge = if contact.has_unread() {
                        format!(" ({} unread)", contact.unread_count)
                    } else {
                        String::new()
                    };
                    let preview = contact.last_message_preview.as_deref().unwrap_or("");
                    println!("{}{badge}  {preview}", contact.name);
                }
            }
        }
    }

    Ok(())
}

fn describe_send_error(error: SendMessageError) -> anyhow::Error {
    match error {
        SendMessageError::EmptyMessage => anyhow!("message text must not be empty"),
        SendMessageError::TemporarilyUnavailable => store_unavailable(),
        SendMessageError::DataContractViolation => store_corrupt(),
    }
}

fn describe_open_error(error: OpenConversationError) -> anyhow::Error {
    match error {
        OpenConversationError::TemporarilyUnavailable => store_unavailable(),
        OpenConversationError::DataContractViolation => store_corrupt(),
    }
}

fn describe_delete_error(error: DeleteMessageError) -> anyhow::Error {
    match error {
        DeleteMessageError::TemporarilyUnavailable => store_unavailable(),
        DeleteMessageError::DataContractViolation => store_corrupt(),
    }
}

fn describe_contacts_error(error: ListContactsError) -> anyhow::Error {
    match error {
        ListContactsError::TemporarilyUnavailable => store_unavailable(),
        ListContactsError::DataContractViolation => store_corrupt(),
    }
}

fn store_unavailable() -> anyhow::Error {
    anyhow!("history store is temporarily unavailable; try again")
}

fn store_corrupt() -> anyhow::Error {
    anyhow!("history store holds data this version cannot read")
}
