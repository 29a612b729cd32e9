use query_build::Config;

static PLAIN: Config = Config::new();
static FORM: Config = Config::new().use_form_encoding(true);

/// Decodes `input`, encodes the result, and checks that decoding the encoded
/// string gives back the same map. Returns the encoded string so it can be
/// snapshotted.
fn roundtrip(input: &str, config: Config) -> String {
    let decoded = config.decode_str(input);
    let encoded = config.encode_map(&decoded);
    let redecoded = config.decode_str(&encoded);
    pretty_assertions::assert_eq!(decoded, redecoded);
    encoded
}

#[test]
fn empty() {
    insta::assert_snapshot!(roundtrip("", PLAIN), @"");
    insta::assert_snapshot!(roundtrip("", FORM), @"");
}

#[test]
fn flat() {
    insta::assert_snapshot!(roundtrip("a=1&b=2", PLAIN), @"a=1&b=2");
    insta::assert_snapshot!(roundtrip("a=1&b=2", FORM), @"a=1&b=2");
}

#[test]
fn nested_maps() {
    let input = "a[b][c]=1&a[b][d]=2&e=3";
    insta::assert_snapshot!(roundtrip(input, PLAIN), @"a[b][c]=1&a[b][d]=2&e=3");
    insta::assert_snapshot!(
        roundtrip(input, FORM),
        @"a%5Bb%5D%5Bc%5D=1&a%5Bb%5D%5Bd%5D=2&e=3"
    );
}

#[test]
fn appended_arrays() {
    insta::assert_snapshot!(roundtrip("a[]=1&a[]=2", PLAIN), @"a[0]=1&a[1]=2");
    insta::assert_snapshot!(roundtrip("a[]=1&a[]=2", FORM), @"a%5B0%5D=1&a%5B1%5D=2");
}

#[test]
fn arrays_with_gaps() {
    insta::assert_snapshot!(roundtrip("a[1]=x&a[]=y", PLAIN), @"a[1]=x&a[0]=y");
}

#[test]
fn last_write_wins() {
    insta::assert_snapshot!(roundtrip("a=1&b=2&a=3", PLAIN), @"a=3&b=2");
}

#[test]
fn bare_keys() {
    insta::assert_snapshot!(roundtrip("flag&x=", PLAIN), @"flag=&x=");
}

#[test]
fn escaped_values() {
    let input = "name=Carrot+City&x=%C3%A9&q=a%26b%3Dc%2Bd&p=100%25";
    insta::assert_snapshot!(
        roundtrip(input, PLAIN),
        @"name=Carrot+City&x=%C3%A9&q=a%26b%3Dc%2Bd&p=100%25"
    );
    insta::assert_snapshot!(
        roundtrip(input, FORM),
        @"name=Carrot+City&x=%C3%A9&q=a%26b%3Dc%2Bd&p=100%25"
    );
}

#[test]
fn slashes() {
    insta::assert_snapshot!(roundtrip("r=/home/x", PLAIN), @"r=/home/x");
    insta::assert_snapshot!(roundtrip("r=/home/x", FORM), @"r=%2Fhome%2Fx");
}

#[test]
fn unclosed_brackets() {
    insta::assert_snapshot!(roundtrip("a[b=1", PLAIN), @"a%5Bb=1");
    insta::assert_snapshot!(roundtrip("a[b][c=1", PLAIN), @"a[b][%5Bc]=1");
    insta::assert_snapshot!(roundtrip("a[b=1", FORM), @"a%255Bb=1");
}

#[test]
fn brackets_inside_keys() {
    insta::assert_snapshot!(roundtrip("a[b]]=1", PLAIN), @"a[b][%5D]=1");
    insta::assert_snapshot!(roundtrip("a[b]]=1", FORM), @"a%5Bb%5D%5B%255D%5D=1");
    insta::assert_snapshot!(roundtrip("a[b c]=1&[x]=2", FORM), @"a%5Bb%2Bc%5D=1");
}

#[test]
fn deeper_than_max_depth() {
    let groups: String = (0..65).map(|i| format!("[k{i}]")).collect();
    let input = format!("a{groups}=1");
    let within_limit = &groups[..groups.len() - "[k64]".len()];
    assert_eq!(roundtrip(&input, PLAIN), format!("a{within_limit}%5Bk64%5D=1"));
    roundtrip(&input, FORM);

    let shallow = Config::new().max_depth(1);
    insta::assert_snapshot!(roundtrip("a[b][c][d]=1", shallow), @"a[b]%5Bc%5D%5Bd%5D=1");
    insta::assert_snapshot!(roundtrip("a[b][c=1&x[y]z=2", shallow), @"a[b]%5Bc=1&x[y]z=2");
    insta::assert_snapshot!(
        roundtrip("a[b][c][d]=1", shallow.use_form_encoding(true)),
        @"a%5Bb%5D%255Bc%255D%255Bd%255D=1"
    );
}
