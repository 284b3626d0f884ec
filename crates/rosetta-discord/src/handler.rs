//! Discord event handlers: the `translate` command and flag reactions.
//!
//! Serenity dispatches each gateway event as its own task, so a handler
//! awaiting the translation call never blocks other events.

use crate::embed::translation_embed;
use rosetta_core::{
    command::{parse_translate_args, CommandError},
    config::Config,
    flags::language_for_flag,
    message::TranslationRequest,
    notice::{Requester, TranslationNotice},
    traits::Translator,
};
use serenity::all::{
    ChannelId, Context, CreateMessage, EventHandler, Mentionable, Message, Reaction,
    ReactionType, Ready, User,
};
use serenity::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Longest message a flag reaction will translate.
pub const REACTION_TEXT_LIMIT: usize = 1000;

const GENERIC_APOLOGY: &str = "Sorry, something went wrong while translating.";
const TOO_LONG_APOLOGY: &str = "Sorry, that message is too long to translate by reaction.";

/// What to do with a flag reaction on a message with the given text.
#[derive(Debug, PartialEq, Eq)]
enum ReactionGate {
    /// Nothing to translate, or the message is itself a translate command.
    Ignore,
    /// Refused: reaction-triggered translations cap the input length.
    TooLong,
    Translate,
}

fn gate_reaction(text: &str, invocation: &str) -> ReactionGate {
    if text.is_empty() || text.starts_with(invocation) {
        ReactionGate::Ignore
    } else if text.chars().count() > REACTION_TEXT_LIMIT {
        ReactionGate::TooLong
    } else {
        ReactionGate::Translate
    }
}

fn display_name(user: &User) -> String {
    user.global_name.clone().unwrap_or_else(|| user.name.clone())
}

fn avatar_url(user: &User) -> String {
    user.avatar_url().unwrap_or_else(|| user.default_avatar_url())
}

async fn send_text(ctx: &Context, channel_id: ChannelId, text: &str) {
    if let Err(e) = channel_id.say(&ctx.http, text).await {
        error!("failed to send message: {e}");
    }
}

/// Event handler state: configuration plus the injected translator.
pub struct Handler {
    config: Config,
    translator: Arc<dyn Translator>,
}

impl Handler {
    pub fn new(config: Config, translator: Arc<dyn Translator>) -> Self {
        Self { config, translator }
    }

    fn usage(&self) -> String {
        format!(
            "Please provide some text to translate. Usage: `{} [language] <text>`",
            self.config.command_invocation()
        )
    }

    /// Run the translation and deliver the result embed, or one apology.
    async fn translate_and_notify(
        &self,
        ctx: &Context,
        channel_id: ChannelId,
        request: TranslationRequest,
        requester: Requester,
        apology: String,
    ) {
        match self.translator.translate(&request).await {
            Ok(translation) => {
                let notice = TranslationNotice {
                    target: request.target.clone(),
                    original_text: request.text.clone(),
                    translated_text: translation.text,
                    detected_source: translation.detected_source,
                    requester,
                };
                let message = CreateMessage::new().embed(translation_embed(&notice));
                if let Err(e) = channel_id.send_message(&ctx.http, message).await {
                    error!("failed to deliver translation {}: {e}", request.id);
                }
            }
            Err(e) => {
                error!("translation {} failed: {e}", request.id);
                send_text(ctx, channel_id, &apology).await;
            }
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("connected as {} ({})", ready.user.name, ready.user.id);
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let invocation = self.config.command_invocation();
        let Some(rest) = msg.content.strip_prefix(&invocation) else {
            return;
        };
        // `!translated ...` is not the command.
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return;
        }

        match parse_translate_args(rest) {
            Ok(args) => {
                let name = display_name(&msg.author);
                let request = TranslationRequest::new(args.text, args.target, name.clone());
                info!(
                    "[command] {} -> {}: {} chars ({})",
                    name,
                    request.target,
                    request.text.chars().count(),
                    request.id
                );
                let requester = Requester {
                    display_name: name,
                    avatar_url: Some(avatar_url(&msg.author)),
                };
                self.translate_and_notify(
                    &ctx,
                    msg.channel_id,
                    request,
                    requester,
                    GENERIC_APOLOGY.to_string(),
                )
                .await;
            }
            Err(CommandError::MissingText) => {
                send_text(&ctx, msg.channel_id, &self.usage()).await;
            }
        }
    }

    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        // Bot reactions are dropped before anything else. Guild events carry
        // the member inline; DM events don't, so the check runs again after
        // the user fetch below.
        if let Some(member) = &reaction.member {
            if member.user.bot {
                return;
            }
        }

        let ReactionType::Unicode(emoji) = &reaction.emoji else {
            return;
        };
        let Some(target) = language_for_flag(emoji) else {
            return;
        };

        let user = match reaction.user(&ctx.http).await {
            Ok(user) => user,
            Err(e) => {
                debug!("cannot resolve reacting user: {e}");
                return;
            }
        };
        if user.bot {
            return;
        }

        let message = match reaction.message(&ctx.http).await {
            Ok(message) => message,
            Err(e) => {
                debug!("cannot fetch reacted-to message: {e}");
                return;
            }
        };

        match gate_reaction(&message.content, &self.config.command_invocation()) {
            ReactionGate::Ignore => {}
            ReactionGate::TooLong => {
                send_text(&ctx, message.channel_id, TOO_LONG_APOLOGY).await;
            }
            ReactionGate::Translate => {
                let name = display_name(&user);
                let request =
                    TranslationRequest::new(message.content.clone(), target, name.clone());
                info!(
                    "[reaction] {emoji} by {}: {} chars -> {} ({})",
                    name,
                    request.text.chars().count(),
                    request.target,
                    request.id
                );
                let requester = Requester {
                    display_name: name,
                    avatar_url: Some(avatar_url(&user)),
                };
                let apology = format!("{}, {}", user.mention(), GENERIC_APOLOGY);
                self.translate_and_notify(
                    &ctx,
                    message.channel_id,
                    request,
                    requester,
                    apology,
                )
                .await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_empty_text_ignored() {
        assert_eq!(gate_reaction("", "!translate"), ReactionGate::Ignore);
    }

    #[test]
    fn test_gate_command_invocations_ignored() {
        assert_eq!(
            gate_reaction("!translate fr hello", "!translate"),
            ReactionGate::Ignore
        );
        // Literal prefix match, same as the original behavior.
        assert_eq!(
            gate_reaction("!translatex", "!translate"),
            ReactionGate::Ignore
        );
    }

    #[test]
    fn test_gate_respects_configured_prefix() {
        assert_eq!(
            gate_reaction("$translate fr hello", "$translate"),
            ReactionGate::Ignore
        );
        assert_eq!(
            gate_reaction("!translate fr hello", "$translate"),
            ReactionGate::Translate
        );
    }

    #[test]
    fn test_gate_length_limit() {
        let at_limit = "a".repeat(REACTION_TEXT_LIMIT);
        assert_eq!(gate_reaction(&at_limit, "!translate"), ReactionGate::Translate);

        let over_limit = "a".repeat(REACTION_TEXT_LIMIT + 1);
        assert_eq!(gate_reaction(&over_limit, "!translate"), ReactionGate::TooLong);
    }

    #[test]
    fn test_gate_counts_chars_not_bytes() {
        // 1000 multi-byte characters are still within the limit.
        let text = "é".repeat(REACTION_TEXT_LIMIT);
        assert_eq!(gate_reaction(&text, "!translate"), ReactionGate::Translate);
    }

    #[test]
    fn test_gate_ordinary_text_translates() {
        assert_eq!(gate_reaction("hello", "!translate"), ReactionGate::Translate);
    }
}
