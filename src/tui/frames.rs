//! The sprite catalog
//!
//! Fixed ASCII sprites for the teddy bear, the chocolate bar, and the
//! decorative overlay rows. Sprite content is presentation detail only; the
//! sequencer never depends on it.

use unicode_width::UnicodeWidthStr;

use crate::sequencer::{Phase, VisualFlags};

use super::ui::center_line;

/// Decorative hearts row shown on both views.
pub const HEARTS_ROW: &str = "\u{2665}  \u{2661}  \u{2665}  \u{2661}  \u{2665}";

/// Anime speed lines shown during the bite wind-up.
pub const SPEED_LINES_ROW: &str = ">>>>   >>>>   >>>>";

/// Impact flash at the moment of the bite.
pub const BITE_IMPACT_ROW: &str = "*  C H O M P !  *";

/// Motion lines while chewing.
pub const CHEW_LINES_ROW: &str = "~  nom  nom  nom  ~";

/// Sparkle overlay.
pub const SPARKLES_ROW: &str = "+  *  .  *  +";

/// Chocolate crumbs under the bar.
pub const CRUMBS_ROW: &str = ".  , .  ,  .";

const BEAR_WIDTH: usize = 11;
const BAR_GAP: &str = "  ";

/// Uniform display width of every frame line.
///
/// All lines are padded to this width so a centered Paragraph shifts the
/// whole frame by the same offset and sprite rows stay aligned with each
/// other.
const FRAME_WIDTH: usize = 22;

fn pad_right(line: String) -> String {
    let width = line.width();
    if width >= FRAME_WIDTH {
        line
    } else {
        format!("{}{}", line, " ".repeat(FRAME_WIDTH - width))
    }
}

/// Eye character for the current phase and blink flag.
fn eye(phase: Phase, blink: bool) -> char {
    if blink {
        '-'
    } else if phase == Phase::Satisfied {
        '^'
    } else {
        'o'
    }
}

/// Mouth row of the bear's face.
///
/// The mouth overlay only appears once the animation has left `Idle`,
/// matching the sprite-swap behavior of the original card.
fn mouth_row(phase: Phase, mouth_open: bool) -> &'static str {
    if phase == Phase::Idle {
        "|    .    |"
    } else if mouth_open {
        "|   (O)   |"
    } else {
        "|   ---   |"
    }
}

/// The bear sprite, eyes and mouth swapped per state.
fn bear_lines(phase: Phase, flags: VisualFlags) -> Vec<String> {
    let e = eye(phase, flags.blink);
    vec![
        "  ()___()  ".to_string(),
        " /       \\ ".to_string(),
        format!("|  {}   {}  |", e, e),
        mouth_row(phase, flags.mouth_open).to_string(),
        " \\_______/ ".to_string(),
        "  _|   |_  ".to_string(),
        " (_|   |_) ".to_string(),
        "   |___|   ".to_string(),
        "  (_) (_)  ".to_string(),
    ]
}

/// The chocolate bar: whole before the bite, a corner missing after.
fn bar_lines(phase: Phase) -> Vec<&'static str> {
    if phase >= Phase::Bite {
        vec![
            " ____    ",
            "|_|_|\\   ",
            "|_|_|_|  ",
            "|_|_|_|_|",
            "|_______|",
        ]
    } else {
        vec![
            " _______ ",
            "|_|_|_|_|",
            "|_|_|_|_|",
            "|_|_|_|_|",
            "|_______|",
        ]
    }
}

/// Bear and chocolate bar side by side, bar bottom-aligned.
fn scene_lines(phase: Phase, flags: VisualFlags) -> Vec<String> {
    let bear = bear_lines(phase, flags);
    let bar = bar_lines(phase);
    let bar_start = bear.len() - bar.len();

    bear.into_iter()
        .enumerate()
        .map(|(i, bear_line)| {
            let line = if i >= bar_start {
                format!(
                    "{:<width$}{}{}",
                    bear_line,
                    BAR_GAP,
                    bar[i - bar_start],
                    width = BEAR_WIDTH
                )
            } else {
                bear_line
            };
            pad_right(line)
        })
        .collect()
}

/// Select a decoration row centered over the scene, or a blank line when
/// the flag is off.
///
/// Blank placeholders keep the frame height stable across the whole run so
/// the scene never jumps vertically.
fn overlay_row(on: bool, row: &str) -> String {
    if on {
        pad_right(center_line(row, FRAME_WIDTH))
    } else {
        " ".repeat(FRAME_WIDTH)
    }
}

/// Assemble the complete animation frame for the current state.
///
/// Layout, top to bottom: speed lines, bite impact, the scene, chew lines,
/// sparkles, crumbs. The row count is constant for a given script.
pub fn frame_lines(phase: Phase, flags: VisualFlags) -> Vec<String> {
    let mut lines = vec![
        overlay_row(flags.speed_lines, SPEED_LINES_ROW),
        overlay_row(flags.bite_impact, BITE_IMPACT_ROW),
    ];
    lines.extend(scene_lines(phase, flags));
    lines.push(overlay_row(flags.chew_lines, CHEW_LINES_ROW));
    lines.push(overlay_row(flags.sparkles, SPARKLES_ROW));
    lines.push(overlay_row(flags.crumbs, CRUMBS_ROW));
    lines
}
