//! The boundary used by anything that draws a tree.
//!
//! Renderers only ever see a node through [`PrintableNode`]: its two children and the text to show
//! for it. This crate doesn't ship a renderer.

/// A node that can be drawn. Implemented by [`NodeRef`][crate::avl::NodeRef].
///
/// # Examples
///
/// ```
/// use balanced_bst::avl::Tree;
/// use balanced_bst::print::PrintableNode;
///
/// /// Renders a tree in a Lisp-ish prefix form.
/// fn render<N: PrintableNode>(node: Option<N>) -> String {
///     match node {
///         None => "-".to_string(),
///         Some(n) => format!("({} {} {})", n.text(), render(n.left()), render(n.right())),
///     }
/// }
///
/// let mut tree = Tree::new();
/// for x in [10, 20, 30] {
///     tree.insert(x);
/// }
///
/// assert_eq!(render(tree.root()), "(20 (10 - -) (30 - -))");
/// ```
pub trait PrintableNode: Sized {
    /// The left child, if any.
    fn left(&self) -> Option<Self>;

    /// The right child, if any.
    fn right(&self) -> Option<Self>;

    /// The text to show for this node.
    fn text(&self) -> String;
}
