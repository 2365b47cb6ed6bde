pub(crate) mod app_session;
pub(crate) mod router;
