mod classes;
mod content;
mod node;

pub use classes::ClassList;
pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Child indices leading from `root` to the element with `id`.
/// The root itself has an empty path.
pub fn path_to(root: &Element, id: &str) -> Option<Vec<usize>> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn collect_path(element: &Element, id: &str, path: &mut Vec<usize>) -> bool {
    if element.id == id {
        return true;
    }
    for (i, child) in element.child_elements().iter().enumerate() {
        path.push(i);
        if collect_path(child, id, path) {
            return true;
        }
        path.pop();
    }
    false
}

/// Direct parent of the element with `id`. `None` for the root or a missing
/// element.
pub fn parent<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    let path = path_to(root, id)?;
    let (_, parent_path) = path.split_last()?;
    parent_path
        .iter()
        .try_fold(root, |current, &index| current.child_elements().get(index))
}

/// Ancestors of the element with `id`, nearest first. Empty if the element is
/// the root or is not in the tree.
pub fn ancestors<'a>(root: &'a Element, id: &str) -> Vec<&'a Element> {
    let Some(path) = path_to(root, id) else {
        return Vec::new();
    };

    let mut chain = Vec::with_capacity(path.len());
    let mut current = root;
    for index in path {
        chain.push(current);
        current = &current.child_elements()[index];
    }
    chain.reverse();
    chain
}

/// Nearest ancestor of `id` matching `predicate`.
pub fn closest<'a>(
    root: &'a Element,
    id: &str,
    predicate: impl Fn(&Element) -> bool,
) -> Option<&'a Element> {
    ancestors(root, id).into_iter().find(|el| predicate(el))
}

/// Every element matching `predicate`, in document order.
pub fn find_all<'a>(root: &'a Element, predicate: impl Fn(&Element) -> bool) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_matching(root, &predicate, &mut found);
    found
}

fn collect_matching<'a>(
    element: &'a Element,
    predicate: &impl Fn(&Element) -> bool,
    found: &mut Vec<&'a Element>,
) {
    if predicate(element) {
        found.push(element);
    }
    for child in element.child_elements() {
        collect_matching(child, predicate, found);
    }
}

/// Move the element with `id` into `wrapper`, then put `wrapper` where the
/// element used to be.
///
/// The element is appended to the descendant of `wrapper` named by
/// `slot_id` (which may be the wrapper itself). Nothing is changed and
/// `false` is returned when `id` is the root, is missing, or `slot_id` is not
/// inside `wrapper`.
pub fn wrap_element(root: &mut Element, id: &str, mut wrapper: Element, slot_id: &str) -> bool {
    let Some(path) = path_to(root, id) else {
        return false;
    };
    let Some((&index, parent_path)) = path.split_last() else {
        return false;
    };
    let slot_accepts_children = find_element(&wrapper, slot_id)
        .is_some_and(|slot| !matches!(slot.content, Content::Text(_)));
    if !slot_accepts_children {
        return false;
    }

    let mut parent = root;
    for &i in parent_path {
        let Content::Children(children) = &mut parent.content else {
            return false;
        };
        parent = &mut children[i];
    }
    let Content::Children(siblings) = &mut parent.content else {
        return false;
    };

    let target = siblings.remove(index);
    if let Some(slot) = find_element_mut(&mut wrapper, slot_id).and_then(Element::child_elements_mut)
    {
        slot.push(target);
    }
    siblings.insert(index, wrapper);
    true
}
