pub(crate) mod announcer;
pub(crate) mod events;
pub(crate) mod join;
pub(crate) mod link;
pub(crate) mod path;
pub(crate) mod sequencer;
