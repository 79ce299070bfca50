mod list_nom;
mod list_paarse;

use criterion::{black_box, criterion_group, Criterion};
use list_nom::nom_parser;
use list_paarse::paarse_parser;
use log::trace;

const LIST: &str = "  [ 1, 22, -333,\t4444 , 55555, 666666,
    7777777, 88888888, -999999999 ] ";

pub fn bench_nom(c: &mut Criterion) {
    c.bench_function("list_nom", |b| b.iter(|| nom_parser(black_box(LIST))));
}

pub fn bench_paarse(c: &mut Criterion) {
    // built once, outside the timed loop
    let parser = paarse_parser();
    c.bench_function("list_paarse", |b| b.iter(|| parser.run(black_box(LIST))));
}

criterion_group!(benches, bench_nom, bench_paarse);

fn main() {
    env_logger::init();
    trace!(target: "paarse", "Logging enabled");
    let expected = nom_parser(LIST).map(|(_, v)| v).ok();
    assert_eq!(paarse_parser().run(LIST).ok(), expected);
    benches();
    Criterion::default().configure_from_args().final_summary();
}
