use pretty_assertions::assert_eq;
use query_build::{Error, Map, Value, path};

fn nested(key: &str, value: Value) -> Value {
    Value::Map(Map::from_iter([(key.to_owned(), value)]))
}

#[test]
fn set_then_overwrite_subtree() {
    let mut root = Map::new();
    path::set(&mut root, "a.b.c", 5).unwrap();
    assert_eq!(
        Value::Map(root.clone()),
        nested("a", nested("b", nested("c", Value::Int(5))))
    );

    path::set(&mut root, "a.b", 9).unwrap();
    assert_eq!(Value::Map(root), nested("a", nested("b", Value::Int(9))));
}

#[test]
fn forget_retains_empty_parent() {
    let mut root = query_build::from_str("a[b][c]=1");
    path::forget(&mut root, "a.b.c").unwrap();
    assert_eq!(
        Value::Map(root.clone()),
        nested("a", nested("b", Value::Map(Map::new())))
    );
    // nothing left to encode
    assert_eq!(query_build::to_string(&root), "");
}

#[test]
fn get_missing_is_absent() {
    let root = Map::from_iter([("a".to_owned(), Value::Int(1))]);
    assert_eq!(path::get(&root, "x.y"), None);
    assert_eq!(path::get(&root, "a.y"), None);
}

#[test]
fn empty_path_fails_without_mutation() {
    let mut root = query_build::from_str("a[b]=1");
    let before = root.clone();
    assert_eq!(path::set(&mut root, "", "v"), Err(Error::EmptyPath));
    assert_eq!(path::forget(&mut root, ""), Err(Error::EmptyPath));
    assert_eq!(root, before);
}

#[test]
fn paths_address_decoded_arrays() {
    let mut root = query_build::from_str("tags[]=a&tags[]=b");
    assert_eq!(path::get(&root, "tags.1"), Some(&Value::from("b")));

    path::set(&mut root, "tags.2", "c").unwrap();
    path::forget(&mut root, "tags.0").unwrap();
    assert_eq!(query_build::to_string(&root), "tags[1]=b&tags[2]=c");
}

#[test]
fn set_discards_scalar_in_the_way() {
    let mut root = query_build::from_str("a=scalar");
    path::set(&mut root, "a.b.c", true).unwrap();
    assert_eq!(query_build::to_string(&root), "a[b][c]=1");
}
