//! Text input and copy button for the color field.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};

use crate::color::Rgba;
use crate::constants;
use crate::edit::{commit_color_text, display_text};
use crate::format::ColorFormat;

/// A text input that shows `color` in the selected `format` and accepts any
/// supported color string.
///
/// Typed text is committed on Enter or focus-lost. Unreadable text reverts to
/// the current color rather than painting the fallback.
pub(crate) fn color_input(
    color: RwSignal<Rgba>,
    format: RwSignal<ColorFormat>,
) -> impl IntoView {
    let text = RwSignal::new(display_text(
        color.get_untracked(),
        format.get_untracked(),
    ));

    // Color / format → text (external updates and format switches)
    create_effect(move |_| {
        let shown = display_text(color.get(), format.get());
        if text.get_untracked() != shown {
            text.set(shown);
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        let commit = commit_color_text(&raw, color.get_untracked(), format.get_untracked());
        if commit.changed {
            color.set(commit.color);
        }
        if raw != commit.text {
            text.set(commit.text);
        }
    };
    let on_commit_clone = on_commit;

    text_input(text)
        .style(|s| {
            s.width(constants::INPUT_WIDTH)
                .padding(2.0)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .background(Color::WHITE)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(constants::RADIUS)
        })
        .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
            on_commit();
        })
        .on_event(floem::event::EventListener::KeyDown, move |e| {
            if let floem::event::Event::KeyDown(ke) = e
                && ke.key.logical_key
                    == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
            {
                on_commit_clone();
                return EventPropagation::Stop;
            }
            EventPropagation::Continue
        })
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => log::trace!("copied {text:?}"),
        Err(e) => log::debug!("clipboard unavailable: {e}"),
    }
}
