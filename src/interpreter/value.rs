/// The tagged result type.
///
/// Defines the `Value` enum that represents both the input of value-tree
/// evaluation (symbols and S-expressions) and its output (numbers and
/// errors), together with its textual rendering.
pub mod core;
