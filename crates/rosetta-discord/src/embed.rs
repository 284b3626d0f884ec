//! Rendering a `TranslationNotice` into a Discord embed.

use rosetta_core::notice::{self, TranslationNotice};
use serenity::all::{Colour, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, Timestamp};

/// Build the notification embed. The timestamp is stamped at call time, so
/// two embeds built from the same notice differ only there.
pub fn translation_embed(notice: &TranslationNotice) -> CreateEmbed {
    let mut author = CreateEmbedAuthor::new(notice.author_line());
    if let Some(url) = &notice.requester.avatar_url {
        author = author.icon_url(url);
    }

    CreateEmbed::new()
        .title(notice::TITLE)
        .description(notice.description())
        .colour(Colour::BLUE)
        .author(author)
        .field(
            notice::ORIGINAL_LABEL,
            notice::code_block(&notice.original_text),
            false,
        )
        .field(
            notice.translated_label(),
            notice::code_block(&notice.translated_text),
            false,
        )
        .footer(CreateEmbedFooter::new(notice::FOOTER))
        .timestamp(Timestamp::now())
}
