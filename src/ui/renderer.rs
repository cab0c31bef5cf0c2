//! Top-level rendering coordinator.
//!
//! Turns a [`UIViewModel`] into text. The output is returned as a `String` so
//! the host decides where it goes.
//!
//! # Example
//!
//! ```rust
//! use tablescout::ui::{render, Theme};
//! use tablescout::AppState;
//!
//! let state = AppState::new();
//! let screen = render(&state.compute_viewmodel(), &Theme::plain(), 80);
//! assert!(screen.contains("No restaurants found. Try a new search!"));
//! ```

use std::fmt::Write;

use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailView, RowView, UIViewModel};

const FAVORITE_MARK: &str = "♥";
const NOT_FAVORITE_MARK: &str = "♡";

/// Renders a view model to text, `cols` characters wide.
#[must_use]
pub fn render(vm: &UIViewModel, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}{}{}{}",
        theme.bold(),
        theme.fg(&theme.colors.header_fg),
        vm.header.title,
        theme.reset()
    );
    let _ = writeln!(out, "{}", "─".repeat(cols.min(80)));

    if let Some(detail) = &vm.detail {
        render_detail(&mut out, detail, theme);
    } else if let Some(empty) = &vm.empty_state {
        let _ = writeln!(out, "{}{}{}", theme.dim(), empty.message, theme.reset());
    } else {
        for (index, row) in vm.rows.iter().enumerate() {
            render_row(&mut out, index, row, theme, cols);
        }
    }

    if vm.footer.loading {
        let _ = writeln!(out, "{}Loading…{}", theme.dim(), theme.reset());
    }
    let _ = writeln!(
        out,
        "{}{}{}",
        theme.fg(&theme.colors.text_dim),
        vm.footer.keybindings,
        theme.reset()
    );

    out
}

/// Formats an error for display below the current screen.
#[must_use]
pub fn render_error(message: &str, theme: &Theme) -> String {
    format!("{}{message}{}\n", theme.fg(&theme.colors.error_fg), theme.reset())
}

fn favorite_mark(is_favorite: bool, theme: &Theme) -> String {
    if is_favorite {
        format!("{}{FAVORITE_MARK}{}", theme.fg(&theme.colors.favorite_fg), theme.reset())
    } else {
        NOT_FAVORITE_MARK.to_string()
    }
}

fn render_row(out: &mut String, index: usize, row: &RowView, theme: &Theme, cols: usize) {
    let name_width = cols.saturating_sub(12).max(10);
    let _ = writeln!(
        out,
        "{index:>3}. {} {}{}{}",
        favorite_mark(row.is_favorite, theme),
        theme.bold(),
        truncate(&row.name, name_width),
        theme.reset()
    );
    if !row.address.is_empty() {
        let _ = writeln!(out, "     {}", truncate(&row.address, name_width));
    }
    let _ = writeln!(
        out,
        "     {}★ {}{} {}  {}  {}[{}]{}",
        theme.fg(&theme.colors.rating_fg),
        row.rating,
        theme.reset(),
        row.reviews,
        row.price,
        theme.dim(),
        row.key,
        theme.reset()
    );
}

fn render_detail(out: &mut String, detail: &DetailView, theme: &Theme) {
    let _ = writeln!(out, "{} {}", favorite_mark(detail.is_favorite, theme), detail.name);
    if let Some(image) = &detail.image_url {
        let _ = writeln!(out, "{}{image}{}", theme.dim(), theme.reset());
    }
    for row in &detail.rows {
        let _ = writeln!(out, "{:<10} {}", row.label, row.value);
    }
    if let Some(map) = &detail.map_url {
        let _ = writeln!(out, "{:<10} {map}", "Map");
    }
    if let Some(phone) = &detail.phone_url {
        let _ = writeln!(out, "{:<10} {phone}", "Call");
    }
}
