/// Receiver for itinerary fragments as they stream in.
///
/// The planner calls `on_fragment` once per provider fragment, in arrival order,
/// before it reads the next one.
pub trait FragmentSink {
    fn on_fragment(&mut self, fragment: &str);
}

impl<F> FragmentSink for F
where
    F: FnMut(&str),
{
    fn on_fragment(&mut self, fragment: &str) {
        self(fragment)
    }
}

/// Collects fragments for later inspection.
impl FragmentSink for Vec<String> {
    fn on_fragment(&mut self, fragment: &str) {
        self.push(fragment.to_string());
    }
}
