use criterion::{Criterion, black_box, criterion_group, criterion_main};
use query_build::{Config, Map, QueryBuild, path};

const SIMPLE: &str = "id=42&name=test_user&active=1";
const NESTED: &str = "id=42&name=Acme&phone=12345&address[city]=Carrot+City&\
    address[street]=Main+St&address[postcode]=12345&user_ids[]=1&user_ids[]=2&\
    user_ids[]=3&user_ids[]=4";
const DEEP: &str = "level1[level2][level3][value]=deep&level1[level2][level3][flags][]=1&\
    level1[level2][config][a]=1&level1[level2][config][b]=2&level1[tags][]=x&\
    level1[tags][]=y&metadata[k1]=v1&metadata[k2]=v2";

fn large_array() -> String {
    appended(100)
}

fn appended(count: usize) -> String {
    (0..count)
        .map(|i| format!("items[]={i}"))
        .collect::<Vec<_>>()
        .join("&")
}

fn decode_simple(c: &mut Criterion) {
    c.bench_function("decode_simple", |b| {
        b.iter(|| query_build::from_str(black_box(SIMPLE)))
    });
}

fn decode_nested(c: &mut Criterion) {
    c.bench_function("decode_nested", |b| {
        b.iter(|| query_build::from_str(black_box(NESTED)))
    });
}

fn decode_deep(c: &mut Criterion) {
    c.bench_function("decode_deep", |b| {
        b.iter(|| query_build::from_str(black_box(DEEP)))
    });
}

fn decode_many_appends(c: &mut Criterion) {
    let input = appended(20_000);
    c.bench_function("decode_many_appends", |b| {
        b.iter(|| query_build::from_str(black_box(&input)))
    });
}

fn decode_large_array(c: &mut Criterion) {
    let input = large_array();
    c.bench_function("decode_large_array", |b| {
        b.iter(|| query_build::from_str(black_box(&input)))
    });
}

fn encode_nested(c: &mut Criterion) {
    let data = query_build::from_str(NESTED);
    c.bench_function("encode_nested", |b| {
        b.iter(|| query_build::to_string(black_box(&data)))
    });
}

fn encode_deep_form(c: &mut Criterion) {
    let data = query_build::from_str(DEEP);
    let config = Config::new().use_form_encoding(true);
    c.bench_function("encode_deep_form", |b| {
        b.iter(|| config.encode_map(black_box(&data)))
    });
}

fn encode_large_array(c: &mut Criterion) {
    let data = query_build::from_str(&large_array());
    c.bench_function("encode_large_array", |b| {
        b.iter(|| query_build::to_string(black_box(&data)))
    });
}

fn path_set_get_forget(c: &mut Criterion) {
    c.bench_function("path_set_get_forget", |b| {
        b.iter(|| {
            let mut map = Map::new();
            path::set(&mut map, black_box("a.b.c.d"), 1).unwrap();
            let found = path::get(&map, black_box("a.b.c.d")).is_some();
            path::forget(&mut map, black_box("a.b.c.d")).unwrap();
            found
        })
    });
}

fn builder_edit_cycle(c: &mut Criterion) {
    c.bench_function("builder_edit_cycle", |b| {
        b.iter(|| {
            let url = black_box("https://example.com/list?page=1&sort[by]=name");
            let mut query = QueryBuild::parse(url);
            query
                .add_param("page", 2)
                .unwrap()
                .add_param_dot("sort.dir", "asc")
                .unwrap();
            query.get_query(None)
        })
    });
}

criterion_group!(
    decode,
    decode_simple,
    decode_nested,
    decode_deep,
    decode_large_array,
    decode_many_appends
);

criterion_group!(encode, encode_nested, encode_deep_form, encode_large_array);

criterion_group!(edit, path_set_get_forget, builder_edit_cycle);

criterion_main!(decode, encode, edit);
