//! Dashboard header sink. The gate populates whatever view it is handed;
//! a context with no header elements uses [`NullView`] instead of failing.

pub trait DashboardView {
    fn set_user_name(&mut self, name: &str);
    fn set_user_role(&mut self, role: &str);
    fn set_user_initials(&mut self, initials: &str);
}

/// No-op view for contexts without a dashboard header.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl DashboardView for NullView {
    fn set_user_name(&mut self, _name: &str) {}
    fn set_user_role(&mut self, _role: &str) {}
    fn set_user_initials(&mut self, _initials: &str) {}
}
