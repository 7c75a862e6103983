//! Color field: swatch, editable color string, copy button and a row of
//! format chips choosing which grammar the string is shown in.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::color::Rgba;
use crate::constants;
use crate::edit::display_text;
use crate::format::ColorFormat;
use crate::inputs::{color_input, copy_button};

fn swatch(color: RwSignal<Rgba>) -> impl IntoView {
    empty().style(move |st| {
        let c = color.get();
        st.width(constants::SWATCH_SIZE)
            .height(constants::SWATCH_SIZE)
            .border_radius(constants::RADIUS)
            .border(1.0)
            .border_color(Color::rgb8(180, 180, 180))
            .background(Color::rgba(
                c.r as f64 / 255.0,
                c.g as f64 / 255.0,
                c.b as f64 / 255.0,
                c.a,
            ))
    })
}

/// A clickable tag selecting `fmt` as the output format.
fn format_chip(fmt: ColorFormat, format: RwSignal<ColorFormat>) -> impl IntoView {
    label(move || fmt.as_str())
        .style(move |s| {
            let s = s
                .font_size(constants::LABEL_FONT)
                .font_family("monospace".to_string())
                .padding_horiz(4.0)
                .padding_vert(1.0)
                .border_radius(constants::RADIUS)
                .cursor(floem::style::CursorStyle::Pointer);
            if format.get() == fmt {
                s.background(Color::rgb8(210, 210, 210))
                    .color(Color::rgb8(40, 40, 40))
            } else {
                s.color(Color::rgb8(120, 120, 120))
                    .hover(|s| s.background(Color::rgb8(230, 230, 230)))
            }
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
            if format.get_untracked() != fmt {
                format.set(fmt);
            }
        })
}

pub(crate) fn color_field(
    color: RwSignal<Rgba>,
    format: RwSignal<ColorFormat>,
) -> impl IntoView {
    v_stack((
        // Swatch + text + copy row
        h_stack((
            swatch(color),
            color_input(color, format),
            copy_button(move || display_text(color.get(), format.get())),
        ))
        .style(|st| st.gap(constants::GAP).items_center()),
        // Output format row
        h_stack((
            format_chip(ColorFormat::Hex, format),
            format_chip(ColorFormat::Hexa, format),
            format_chip(ColorFormat::Rgb, format),
            format_chip(ColorFormat::Rgba, format),
            format_chip(ColorFormat::Hsl, format),
            format_chip(ColorFormat::Hsla, format),
        ))
        .style(|st| st.gap(constants::GAP / 2.0).items_center()),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding(constants::PADDING)
            .background(Color::rgb8(242, 242, 242))
    })
}
