// src/cli/show.rs - Print one session's messages

use std::io::Write;

use crate::core::loader::SessionLoader;
use crate::core::timefmt::message_label;
use crate::core::types::Message;
use crate::core::viewer::ConversationViewer;
use crate::source::SessionSource;

pub struct ShowOptions {
    pub id: i64,
    pub max_pages: u32,
    pub json: bool,
}

/// Page through the collection until session `id` turns up, then print it.
pub async fn run_show<W: Write>(
    source: &dyn SessionSource,
    opts: &ShowOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut loader = SessionLoader::new();
    let mut viewer = ConversationViewer::new();

    loop {
        let page = loader.next_page();
        loader.load_page(source, page).await?;
        if viewer.select_session(loader.sessions(), opts.id) {
            break;
        }
        if !loader.has_more() || loader.loaded_pages() >= opts.max_pages {
            anyhow::bail!(
                "Session {} not found in {} page(s)",
                opts.id,
                loader.loaded_pages()
            );
        }
    }

    if opts.json {
        serde_json::to_writer_pretty(&mut *out, viewer.messages())?;
        writeln!(out)?;
        return Ok(());
    }

    if let Some(session) = loader.find(opts.id) {
        writeln!(out, "{} (#{})", session.name, session.id)?;
        writeln!(out)?;
    }
    for message in viewer.messages() {
        writeln!(out, "{}", format_message_line(message))?;
    }
    Ok(())
}

pub fn format_message_line(message: &Message) -> String {
    let indent = if message.is_user() { "        " } else { "" };
    format!(
        "{indent}[{}] {}  {}",
        message.action.label(),
        message_label(&message.timestamp),
        message.content
    )
}
