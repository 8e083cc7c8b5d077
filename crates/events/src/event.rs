/// A host UI event (control change, click, key press, resize...).
///
/// Events are plain values: a host builds one from the raw DOM event and
/// hands it to the site layer, which never touches the DOM itself.
pub trait UiEvent: Clone + core::fmt::Debug {
    /// Stable event name (e.g. "inventory.filter_changed").
    fn event_type(&self) -> &'static str;
}
