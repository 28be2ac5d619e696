use std::io::{BufRead, Write};

use anyhow::Result;

use crate::core::interfaces::ports::Plugin;
use crate::core::models::{EventContext, HostContext, PluginConfig};
use crate::core::orchestrators::Img2UrlPlugin;
use crate::global_constants::{self, LOG_TAG_HOST};
use crate::ports::LocalFileMessage;

#[derive(Debug, PartialEq, Eq)]
enum ConsoleCommand {
    Message { user_id: String, text: String },
    Image { user_id: String, path: String },
    Help,
    Quit,
    Empty,
}

/// Minimal chat host that reads messages from a terminal and feeds them to plugins.
pub struct ConsoleChatHost {
    plugins: Vec<Box<dyn Plugin>>,
}

impl ConsoleChatHost {
    pub fn build(config: &PluginConfig) -> Self {
        log::info!("{} building console host", LOG_TAG_HOST);
        Self::with_plugins(vec![Box::new(Img2UrlPlugin::from_config(config))])
    }

    pub fn with_plugins(plugins: Vec<Box<dyn Plugin>>) -> Self {
        for plugin in &plugins {
            let descriptor = plugin.descriptor();
            log::info!(
                "{} registered plugin {} v{} (priority {})",
                LOG_TAG_HOST,
                descriptor.name,
                descriptor.version,
                descriptor.desire_priority
            );
        }

        Self { plugins }
    }

    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        for line in input.lines() {
            match Self::parse_line(&line?) {
                ConsoleCommand::Quit => break,
                ConsoleCommand::Empty => {}
                ConsoleCommand::Help => {
                    for plugin in &self.plugins {
                        if !plugin.descriptor().hidden {
                            writeln!(output, "{}", plugin.help_text())?;
                        }
                    }
                }
                ConsoleCommand::Message { user_id, text } => {
                    self.dispatch(HostContext::text_message(user_id, text), &mut output)?;
                }
                ConsoleCommand::Image { user_id, path } => {
                    let raw_message = Box::new(LocalFileMessage::from_path(path));
                    self.dispatch(HostContext::image_message(user_id, raw_message), &mut output)?;
                }
            }
        }

        log::info!("{} console input closed", LOG_TAG_HOST);
        Ok(())
    }

    fn dispatch(&mut self, context: HostContext, output: &mut impl Write) -> Result<()> {
        let mut event_context = EventContext::new(context);

        for plugin in self.plugins.iter_mut() {
            plugin.on_handle_context(&mut event_context);
            if event_context.action.stops_pipeline() {
                log::debug!(
                    "{} {} stopped the pipeline",
                    LOG_TAG_HOST,
                    plugin.descriptor().name
                );
                break;
            }
        }

        match &event_context.reply {
            Some(reply) => writeln!(output, "[{}] {}", reply.reply_type, reply.content)?,
            None => log::debug!("{} no plugin replied", LOG_TAG_HOST),
        }

        Ok(())
    }

    fn parse_line(line: &str) -> ConsoleCommand {
        let line = line.trim();

        if line.is_empty() {
            return ConsoleCommand::Empty;
        }
        if line == global_constants::CONSOLE_QUIT_COMMAND {
            return ConsoleCommand::Quit;
        }
        if line == global_constants::CONSOLE_HELP_COMMAND {
            return ConsoleCommand::Help;
        }

        let (user_id, body) = match line.strip_prefix('@') {
            Some(rest) => match rest.split_once(char::is_whitespace) {
                Some((user_id, body)) => (user_id.to_string(), body.trim_start()),
                None => (rest.to_string(), ""),
            },
            None => (global_constants::CONSOLE_DEFAULT_USER.to_string(), line),
        };

        if let Some(path) = body
            .strip_prefix(global_constants::CONSOLE_IMAGE_COMMAND)
            .filter(|rest| rest.starts_with(char::is_whitespace))
        {
            return ConsoleCommand::Image {
                user_id,
                path: path.trim().to_string(),
            };
        }

        ConsoleCommand::Message {
            user_id,
            text: body.to_string(),
        }
    }
}
