use sprig_syntax::{Node as _, NodeKind, NonTerminal, SyntaxNode, Terminal, TreeBuilder};

fn leaf(text: &str) -> SyntaxNode {
    Terminal::new(1, text).into()
}

fn expr(children: impl IntoIterator<Item = SyntaxNode>) -> SyntaxNode {
    NonTerminal::new(1, "expr", children).into()
}

fn fixtures() -> Vec<SyntaxNode> {
    vec![
        leaf("foo"),
        leaf(""),
        Terminal::unset(3).into(),
        NonTerminal::new(2, "x", []).into(),
        NonTerminal::from_parts(2, None, [leaf("a")]).into(),
        expr([leaf("1"), leaf("+"), leaf("2")]),
        expr([expr([leaf("a"), Terminal::unset(1).into()]), leaf("b")]),
    ]
}

fn has_unset_leaf(node: &SyntaxNode) -> bool {
    node.terminals().any(|terminal| terminal.text().is_none())
}

#[test]
fn deep_copy_is_equal_unless_unset_leaf() {
    for node in fixtures() {
        let copy = node.deep_copy();
        assert_eq!(node.structural_eq(Some(&copy)), !has_unset_leaf(&node), "{node:?}");
        assert_eq!(copy.kind(), node.kind());
        assert_eq!(copy.line(), node.line());
    }
}

#[test]
fn deep_copy_shares_no_storage() {
    for node in fixtures() {
        let copy = node.deep_copy();
        for (original, copied) in node.descendants().zip(copy.descendants()) {
            match (original, copied) {
                (SyntaxNode::Terminal(original), SyntaxNode::Terminal(copied)) => {
                    assert!(!copied.shares_text_with(original));
                }
                (SyntaxNode::NonTerminal(original), SyntaxNode::NonTerminal(copied)) => {
                    assert!(!copied.shares_text_with(original));
                    assert!(!copied.shares_children_with(original));
                }
                _ => panic!("deep copy changed the shape of {node:?}"),
            }
        }
    }
}

#[test]
fn shallow_clone_aliases_storage() {
    let node = expr([leaf("1"), leaf("2")]);
    let alias = node.shallow_clone();

    let (Some(node), Some(alias)) = (node.as_non_terminal(), alias.as_non_terminal()) else {
        panic!("expected branches");
    };
    assert!(alias.shares_children_with(node));
    assert!(alias.shares_text_with(node));
    assert_eq!(alias.children().as_ptr(), node.children().as_ptr());
}

#[test]
fn kind_eq_ignores_content() {
    let a = leaf("a");
    let b = leaf("b");
    let branch = expr([leaf("a")]);

    assert!(a.kind_eq(Some(&b)));
    assert!(!a.kind_eq(Some(&branch)));
    assert!(!branch.kind_eq(Some(&a)));
    assert!(Terminal::unset(1).kind_eq(Some(&a)));
}

#[test]
fn different_kinds_never_equal() {
    let token = leaf("x");
    let branch: SyntaxNode = NonTerminal::new(1, "x", []).into();
    assert!(!token.structural_eq(Some(&branch)));
    assert!(!branch.structural_eq(Some(&token)));
}

#[test]
fn none_is_never_equal() {
    for node in fixtures() {
        assert!(!node.structural_eq(None));
        assert!(!node.kind_eq(None));
    }
}

#[test]
fn make_keeps_kind() {
    let children = [leaf("a"), expr([leaf("b")])];
    for node in fixtures() {
        for text in [None, Some(&b""[..]), Some(&b"z"[..])] {
            let made = node.make(42, text, &children);
            assert_eq!(made.kind(), node.kind());
            assert_eq!(made.line(), 42);
            assert_eq!(made.text(), text);
        }
    }
}

#[test]
fn copy_then_derive_leaves_original_intact() {
    let original = Terminal::new(1, "foo");
    let copy = original.deep_copy();

    let mut bytes = copy.text().unwrap_or_default().to_vec();
    bytes.push(b'x');
    let derived = copy.make(copy.line(), Some(bytes.as_slice()), &[]);

    assert_eq!(original.text(), Some(&b"foo"[..]));
    assert_eq!(derived.text(), Some(&b"foox"[..]));
    assert!(!original.structural_eq(Some(&derived.into())));
}

#[test]
fn independently_built_trees_are_equal() {
    let a = expr([leaf("1"), leaf("+"), leaf("2")]);
    let b = expr([leaf("1"), leaf("+"), leaf("2")]);
    assert!(a.structural_eq(Some(&b)));
}

#[test]
fn reordered_children_are_not_equal() {
    let a = expr([leaf("1"), leaf("+"), leaf("2")]);
    let b = expr([leaf("+"), leaf("1"), leaf("2")]);
    assert!(!a.structural_eq(Some(&b)));
}

#[test]
fn unset_leaves_are_never_equal() {
    let a: SyntaxNode = Terminal::unset(1).into();
    let b: SyntaxNode = Terminal::unset(1).into();
    assert!(!a.structural_eq(Some(&b)));
    assert!(!a.structural_eq(Some(&a)));
    assert!(!a.structural_eq(Some(&leaf(""))));
}

#[test]
fn same_kind_different_text() {
    let x: SyntaxNode = NonTerminal::new(1, "x", []).into();
    let y: SyntaxNode = NonTerminal::new(1, "y", []).into();
    assert!(x.kind_eq(Some(&y)));
    assert!(!x.structural_eq(Some(&y)));
}

#[test]
fn kinds_are_fixed_per_variant() {
    assert_eq!(leaf("x").kind(), NodeKind::Token);
    assert_eq!(expr([]).kind(), NodeKind::GreenNode);
    assert!(leaf("x").children().is_empty());
}

#[test]
fn nodes_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SyntaxNode>();

    let tree = expr([leaf("1"), leaf("2")]);
    let alias = tree.shallow_clone();
    let handle = std::thread::spawn(move || alias.terminals().count());
    assert_eq!(handle.join().ok(), Some(2));
    assert_eq!(tree.terminals().count(), 2);
}

const DEEP: usize = 100_000;

fn deep_chain(depth: usize) -> SyntaxNode {
    let mut node = leaf("x");
    for _ in 0..depth {
        node = expr([leaf("+"), node]);
    }
    node
}

#[test]
fn deep_chain_copies_compares_and_drops() {
    let tree = deep_chain(DEEP);
    let copy = tree.deep_copy();
    assert!(tree.structural_eq(Some(&copy)));
    assert!(copy == tree);
    assert!(!tree.structural_eq(Some(&deep_chain(DEEP - 1))));
    assert_eq!(copy.descendants().count(), 2 * DEEP + 1);

    let alias = tree.shallow_clone();
    drop(tree);
    assert!(alias.structural_eq(Some(&copy)));
    drop(alias);
    drop(copy);
}

#[test]
fn deep_chain_from_builder() {
    let mut builder = TreeBuilder::new();
    for line in 0..DEEP as u32 {
        builder.start_node(line, Some(b"p")).unwrap();
    }
    builder.token(0, Some(b"x")).unwrap();
    for _ in 0..DEEP {
        builder.finish_node().unwrap();
    }
    let tree = builder.finish().unwrap();

    let made = tree.make(0, Some(b"p"), &[tree.shallow_clone()]);
    assert_eq!(made.terminals().count(), 1);
    assert_eq!(u32::from(made.token_text_len()), 1);
    assert!(!made.structural_eq(Some(&tree)));
}
