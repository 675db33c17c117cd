use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use pinwheel::app::ProgressIndicator;
use pinwheel::app::config::DemoConfig;
use pinwheel::app::demo::DemoState;
use pinwheel::app::test_support::ManualTimer;
use pinwheel::ui::adapters::TerminalSurface;
use pinwheel::ui::components::MainLayout;

pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

pub const HALF_BLOCK: &str = "▀";

pub type TestState = DemoState<ManualTimer, TerminalSurface>;

/// Demo state over a manual timer; the returned handle shares its log.
pub fn create_test_state() -> (TestState, ManualTimer) {
    let timer = ManualTimer::new();
    let indicator = ProgressIndicator::new(timer.clone(), TerminalSurface::new());
    (DemoState::new(indicator).unwrap(), timer)
}

pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).unwrap()
}

pub fn render_and_get_buffer(terminal: &mut Terminal<TestBackend>, state: &TestState) -> Buffer {
    let demo = DemoConfig::default();
    terminal
        .draw(|frame| MainLayout::render(frame, state, &demo))
        .unwrap();

    terminal.backend().buffer().clone()
}

pub fn render_to_string(terminal: &mut Terminal<TestBackend>, state: &TestState) -> String {
    buffer_to_string(&render_and_get_buffer(terminal, state))
}

pub fn half_block_count(buffer: &Buffer) -> usize {
    buffer
        .content()
        .iter()
        .filter(|cell| cell.symbol() == HALF_BLOCK)
        .count()
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        if y < buffer.area.height - 1 {
            result.push('\n');
        }
    }
    result
}

/// Inner area of the indicator panel on the default test screen: one header
/// row and one border cell in from the top-left corner, `DemoConfig::default()`
/// size (20 px wide, 10 rows).
pub fn indicator_area() -> Rect {
    Rect::new(1, 2, 20, 10)
}

/// Darkest to lightest; `.` is the untouched background.
const SHADES: [(u8, char); 5] = [(42, '@'), (84, '#'), (126, '+'), (168, '-'), (208, ':')];

/// One character per pixel of the indicator, two text rows per cell row,
/// graded by the composited gray level so opacity differences show up.
pub fn indicator_shades(buffer: &Buffer) -> String {
    let area = indicator_area();
    let mut rows = Vec::with_capacity(usize::from(area.height) * 2);

    for y in area.top()..area.bottom() {
        let mut top = String::new();
        let mut bottom = String::new();
        for x in area.left()..area.right() {
            let cell = buffer.cell((x, y)).unwrap();
            if cell.symbol() == HALF_BLOCK {
                top.push(shade(cell.fg));
                bottom.push(shade(cell.bg));
            } else {
                top.push('.');
                bottom.push('.');
            }
        }
        rows.push(top);
        rows.push(bottom);
    }

    rows.join("\n")
}

fn shade(color: Color) -> char {
    let Color::Rgb(level, _, _) = color else {
        return '?';
    };
    SHADES
        .iter()
        .find(|(limit, _)| level < *limit)
        .map_or('.', |(_, c)| *c)
}
