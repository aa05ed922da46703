/// Policy for choosing between a type's constructors when materializing a
/// record.
///
/// Fixed at factory construction, never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConstructorPolicy {
    /// Shortcut behavior: if the type has a parameterless constructor, use it
    /// unconditionally, without inspecting the record at all.
    ///
    /// Everything beyond what the parameterless path can express is applied
    /// later via property assignment.
    PreferParameterless,
    /// Most-specific behavior (default): pick the qualifying constructor with
    /// the most parameters, binding as much data as possible at construction
    /// time.
    #[default]
    MostSpecific,
}
