use mta_helper::MtaError;

use crate::ui::json::{emit_event, events::ErrorEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    match err.downcast_ref::<MtaError>() {
        Some(mta) if mta.is_operator_abort() => format!(
            "{} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            mta
        ),
        _ => format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(format!("{:#}", err)).render(supports_color)
        ),
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let _ = emit_event(&ErrorEvent::from_anyhow(err));
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
