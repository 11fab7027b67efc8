//! Terminal tetris.

use anyhow::Result;

use tui_arcade::types::GameKind;

fn main() -> Result<()> {
    tui_arcade::play::run(GameKind::Tetris)
}
