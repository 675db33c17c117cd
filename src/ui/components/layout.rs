use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use pinwheel_app::config::DemoConfig;
use pinwheel_app::demo::DemoState;
use pinwheel_app::ports::TimerService;

use super::atoms::panel_block;
use super::control_panel::ControlPanel;
use super::footer::Footer;
use super::header::Header;
use super::indicator::IndicatorView;
use crate::adapters::TerminalSurface;

const BORDER: u16 = 2;

pub struct MainLayout;

impl MainLayout {
    pub fn render<T: TimerService>(
        frame: &mut Frame,
        state: &DemoState<T, TerminalSurface>,
        demo: &DemoConfig,
    ) {
        let area = frame.area();

        let [header_area, main_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        Header::render(frame, header_area);

        let (cols, rows) = Self::indicator_cells(state, demo);
        let [indicator_column, controls_area] =
            Layout::horizontal([Constraint::Length(cols + BORDER), Constraint::Min(20)])
                .areas(main_area);
        let [indicator_area, _] =
            Layout::vertical([Constraint::Length(rows + BORDER), Constraint::Min(0)])
                .areas(indicator_column);

        Self::render_indicator(frame, indicator_area, state, demo);
        ControlPanel::render(frame, controls_area, state);
        Footer::render(frame, footer_area);
    }

    /// Fixed-size indicator: `demo.size` pixels wide, height from
    /// `height_for_width`, two pixel rows per cell.
    pub fn indicator_cells<T: TimerService>(
        state: &DemoState<T, TerminalSurface>,
        demo: &DemoConfig,
    ) -> (u16, u16) {
        let width = demo.size.min(u32::from(u16::MAX - BORDER));
        let height = state.indicator.height_for_width(width);
        (width as u16, TerminalSurface::rows_for_pixels(height))
    }

    fn render_indicator<T: TimerService>(
        frame: &mut Frame,
        area: Rect,
        state: &DemoState<T, TerminalSurface>,
        demo: &DemoConfig,
    ) {
        let block = panel_block("spinner", state.indicator.is_animated());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(IndicatorView::new(&state.indicator, demo.background), inner);
    }
}
