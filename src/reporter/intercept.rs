//! Capturing and decorating per-test output
//!
//! The wrapped reporter writes each result into an in-memory [`CaptureUI`]
//! instead of the real sink. The captured block gets a duration annotation
//! and, for results that did not pass, a coloured first line. Only then is
//! it written to the real sink. The real sink is never handed to the
//! wrapped reporter, so a failing delegate leaves it untouched.

use crate::error::Result;
use crate::results::TestResult;
use crate::style::Styles;
use crate::ui::{CaptureUI, UI};
use tracing::warn;

/// The duration annotation is spliced in front of the first occurrence.
pub const DURATION_MARKER: &str = " -";

/// Run `delegate` against a capture sink and return it.
///
/// An error from `delegate` is returned unchanged and the capture dropped.
pub fn capture<F>(delegate: F) -> Result<CaptureUI>
where
    F: FnOnce(&mut dyn UI) -> Result<()>,
{
    let mut sink = CaptureUI::new();
    delegate(&mut sink)?;
    Ok(sink)
}

/// Decorated text of one result, without writing it anywhere.
///
/// Errors and warnings the delegate emitted are forwarded to `diagnostics`.
pub fn render_one<F>(
    result: &TestResult,
    styles: &Styles,
    diagnostics: &mut dyn UI,
    delegate: F,
) -> Result<String>
where
    F: FnOnce(&mut dyn UI) -> Result<()>,
{
    let mut sink = capture(delegate)?;
    sink.replay_diagnostics(diagnostics)?;
    Ok(decorate(sink.into_captured(), result, styles))
}

/// Capture, decorate and write one result to `out`.
///
/// Errors and warnings the delegate emitted are forwarded to `out` before
/// the decorated text.
pub fn display_one<F>(
    out: &mut dyn UI,
    result: &TestResult,
    styles: &Styles,
    delegate: F,
) -> Result<()>
where
    F: FnOnce(&mut dyn UI) -> Result<()>,
{
    let text = render_one(result, styles, out, delegate)?;
    out.write(&text)
}

/// Add the duration annotation and colour the first line of `text`.
///
/// Without a marker the annotation goes at the end of the first line. Text
/// without a newline is all first line.
pub fn decorate(mut text: String, result: &TestResult, styles: &Styles) -> String {
    let annotation = format!(" - [{} ms]", result.run_duration);
    match text.find(DURATION_MARKER) {
        Some(pos) => text.insert_str(pos, &annotation),
        None => {
            warn!(test = %result.name, "no duration marker in reporter output");
            text.insert_str(first_line_end(&text), &annotation);
        }
    }

    if !result.passed {
        let end = first_line_end(&text);
        let colored = if result.skipped {
            styles.skip(&text[..end])
        } else {
            styles.fail(&text[..end])
        }
        .into_owned();
        text.replace_range(..end, &colored);
    }
    text
}

fn first_line_end(text: &str) -> usize {
    text.find('\n').unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::style::ColorMode;
    use crate::ui::test_ui::TestUI;

    fn line_writer(text: &'static str) -> impl FnOnce(&mut dyn UI) -> Result<()> {
        move |ui: &mut dyn UI| ui.write(text)
    }

    #[test]
    fn test_annotation_before_marker() {
        let result = TestResult::passed("unit a").with_duration(12);
        let text = decorate("ok 1 Chrome - unit a\n".to_string(), &result, &Styles::plain());
        assert_eq!(text, "ok 1 Chrome - [12 ms] - unit a\n");
    }

    #[test]
    fn test_annotation_uses_first_marker_only() {
        let result = TestResult::passed("a - b").with_duration(3);
        let text = decorate("ok 1 X - a - b\n".to_string(), &result, &Styles::plain());
        assert_eq!(text, "ok 1 X - [3 ms] - a - b\n");
    }

    #[test]
    fn test_missing_marker_appends_to_first_line() {
        let result = TestResult::passed("a").with_duration(7);
        let text = decorate("ok 1\ntrailer\n".to_string(), &result, &Styles::plain());
        assert_eq!(text, "ok 1 - [7 ms]\ntrailer\n");

        let text = decorate("ok 1".to_string(), &result, &Styles::plain());
        assert_eq!(text, "ok 1 - [7 ms]");
    }

    #[test]
    fn test_failed_first_line_colored() {
        let styles = Styles::new(ColorMode::Always);
        let result = TestResult::failed("unit b").with_duration(15);
        let text = decorate(
            "not ok 2 Chrome - unit b\n    ---\n    ...\n".to_string(),
            &result,
            &styles,
        );
        let first = styles
            .fail
            .apply_to("not ok 2 Chrome - [15 ms] - unit b")
            .to_string();
        assert_eq!(text, format!("{}\n    ---\n    ...\n", first));
    }

    #[test]
    fn test_skipped_first_line_uses_skip_color() {
        let styles = Styles::new(ColorMode::Always);
        let result = TestResult::skipped("unit c").with_duration(1);
        let text = decorate("skip 3 Chrome - unit c\n".to_string(), &result, &styles);
        let first = styles.skip.apply_to("skip 3 Chrome - [1 ms] - unit c").to_string();
        assert_eq!(text, format!("{}\n", first));
    }

    #[test]
    fn test_passed_is_not_colored() {
        let styles = Styles::new(ColorMode::Always);
        let result = TestResult::passed("unit a").with_duration(1);
        let text = decorate("ok 1 Chrome - unit a\n".to_string(), &result, &styles);
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_display_one_writes_decorated_text() {
        let mut out = TestUI::new();
        let result = TestResult::passed("unit a").with_duration(5);
        display_one(
            &mut out,
            &result,
            &Styles::plain(),
            line_writer("ok 1 Chrome - unit a\n"),
        )
        .unwrap();
        assert_eq!(out.written, "ok 1 Chrome - [5 ms] - unit a\n");
    }

    #[test]
    fn test_display_one_propagates_delegate_error() {
        let mut out = TestUI::new();
        let result = TestResult::failed("unit b");
        let err = display_one(&mut out, &result, &Styles::plain(), |ui: &mut dyn UI| {
            ui.write("partial")?;
            Err(Error::Other("delegate failed".to_string()))
        })
        .unwrap_err();

        assert_eq!(err.to_string(), "delegate failed");
        assert!(out.written.is_empty());

        // The real sink is still usable afterwards.
        display_one(&mut out, &result, &Styles::plain(), line_writer("not ok 1 - b\n")).unwrap();
        assert_eq!(out.written, "not ok 1 - [0 ms] - b\n");
    }

    #[test]
    fn test_display_one_forwards_diagnostics() {
        let mut out = TestUI::new();
        let result = TestResult::passed("a");
        display_one(&mut out, &result, &Styles::plain(), |ui: &mut dyn UI| {
            ui.warning("slow launcher")?;
            ui.write("ok 1 - a\n")
        })
        .unwrap();
        assert_eq!(out.errors, vec!["Warning: slow launcher"]);
        assert_eq!(out.written, "ok 1 - [0 ms] - a\n");
    }

    #[test]
    fn test_render_one_does_not_write() {
        let result = TestResult::passed("a").with_duration(2);
        let mut diagnostics = TestUI::new();
        let text = render_one(
            &result,
            &Styles::plain(),
            &mut diagnostics,
            line_writer("ok 1 - a\n"),
        )
        .unwrap();
        assert_eq!(text, "ok 1 - [2 ms] - a\n");
        assert!(diagnostics.written.is_empty());
    }

    #[test]
    fn test_render_one_forwards_diagnostics() {
        let result = TestResult::failed("b");
        let mut diagnostics = TestUI::new();
        let text = render_one(&result, &Styles::plain(), &mut diagnostics, |ui: &mut dyn UI| {
            ui.error("launcher crashed")?;
            ui.write("not ok 2 - b\n")
        })
        .unwrap();
        assert_eq!(text, "not ok 2 - [0 ms] - b\n");
        assert_eq!(diagnostics.errors, vec!["launcher crashed"]);
        assert!(diagnostics.written.is_empty());
    }
}
