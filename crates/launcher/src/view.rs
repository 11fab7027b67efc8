//! MenuView: draws the launcher screen into a framebuffer. Pure (no I/O).

use tui_arcade_term::{CellStyle, FrameBuffer, Rgb, Viewport};

use crate::menu::{Menu, MenuOption};

const LOGO: [&str; 7] = [
    r" ________   _________  ________   ______     ________     ",
    r"/_______/\ /________/\/_______/\ /_____/\  /_______/\    ",
    r"\::: _  \ \\__.::.__\/\::: _  \ \\:::_ \ \  \__.::._\/    ",
    r" \::(_)  \ \  \::\ \   \::(_)  \ \\:(_) ) )_   \::\ \     ",
    r"  \:: __  \ \  \::\ \   \:: __  \ \\: __ `\ \  _\::\ \__  ",
    r"   \:.\ \  \ \  \::\ \   \:.\ \  \ \\ \ `\ \ \/__\::\__/\ ",
    r"    \__\/\__\/   \__\/    \__\/\__\/ \_\/ \_\/\________\/ ",
];

const HINT: &str = "a/d: option   w/s: game   enter: launch   q: quit";

const LEFT: u16 = 2;
const TOP: u16 = 1;

/// A run of text in the option row; `highlight` marks the selected label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlight: bool,
}

impl Segment {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlight: false,
        }
    }

    fn lit(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlight: true,
        }
    }
}

/// `Start        (snake)        Quit`, with brackets around the selection.
pub fn option_row(menu: &Menu) -> Vec<Segment> {
    let game = menu.current_game().map(|g| g.name.as_str()).unwrap_or("-");
    let mut row = Vec::new();
    for option in MenuOption::ALL {
        let selected = menu.selected() == option;
        match (option, selected) {
            (MenuOption::Game, true) => {
                row.push(Segment::plain("        [("));
                row.push(Segment::lit(game));
                row.push(Segment::plain(")]        "));
            }
            (MenuOption::Game, false) => {
                row.push(Segment::plain(format!("        ({game})        ")));
            }
            (_, true) => {
                row.push(Segment::plain("["));
                row.push(Segment::lit(option.label()));
                row.push(Segment::plain("]"));
            }
            (_, false) => row.push(Segment::plain(option.label())),
        }
    }
    row
}

pub fn option_row_text(menu: &Menu) -> String {
    option_row(menu).into_iter().map(|s| s.text).collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MenuView;

impl MenuView {
    pub fn render_into(
        &self,
        menu: &Menu,
        status: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let logo = CellStyle::fg(Rgb::new(230, 120, 60)).bold();
        let normal = CellStyle::default();
        let selected = CellStyle::fg(Rgb::new(80, 220, 80)).bold();
        let dim = CellStyle::fg(Rgb::new(130, 130, 140));

        let mut y = TOP;
        for line in LOGO {
            fb.put_str(LEFT, y, line, logo);
            y += 1;
        }
        y += 1;

        let mut x = LEFT;
        for segment in option_row(menu) {
            let style = if segment.highlight { selected } else { normal };
            x = fb.put_str(x, y, &segment.text, style);
        }
        y += 2;

        fb.put_str(LEFT, y, HINT, dim);
        if let Some(status) = status {
            fb.put_str(LEFT, y + 2, status, normal);
        }
    }

    pub fn render(&self, menu: &Menu, status: Option<&str>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(menu, status, viewport, &mut fb);
        fb
    }
}
