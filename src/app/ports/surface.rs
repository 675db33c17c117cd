use pinwheel_domain::Size;

/// The host area the widget draws into.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
pub trait Surface {
    /// Schedules a repaint; the host decides when it happens.
    fn request_redraw(&self);

    fn current_size(&self) -> Size;
}
