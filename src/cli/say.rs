//! TUI-less "say" command

use std::error::Error;
use std::sync::Arc;

use crate::core::message::ChatMessage;
use crate::core::sink::ChatLog;
use crate::core::transport::{ChatTransport, HttpTransport};
use crate::core::widget::ChatWidget;

pub async fn run_say(prompt: Vec<String>, endpoint: &str) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.join(" ");
    let transport: Arc<dyn ChatTransport> = Arc::new(HttpTransport::new(endpoint));

    match say_once(&prompt, transport).await {
        Some(Ok(reply)) => {
            println!("{}", reply.text);
            Ok(())
        }
        Some(Err(reply)) => {
            eprintln!("{}", reply.text);
            std::process::exit(1);
        }
        None => {
            eprintln!("Usage: chatline say <prompt>");
            std::process::exit(1);
        }
    }
}

/// Run one exchange and hand back the agent message it produced.
///
/// `None` for a blank prompt; `Err` carries the rendered `Error: ...` message.
pub async fn say_once(
    prompt: &str,
    transport: Arc<dyn ChatTransport>,
) -> Option<Result<ChatMessage, ChatMessage>> {
    let log = Arc::new(ChatLog::new());
    let widget = ChatWidget::new(String::new(), Arc::clone(&log), transport);

    let outcome = widget.exchange(prompt).await?;
    let reply = log.messages().pop()?;
    Some(match outcome {
        Ok(()) => Ok(reply),
        Err(_) => Err(reply),
    })
}
