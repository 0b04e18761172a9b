// Render benchmarks: every registered route, the composer alone, and a
// widget fragment round.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use empc_site::compose::compose;
use empc_site::content::{groupal, therapies};
use empc_site::render::widgets;
use empc_site::widgets::CarouselState;
use empc_site::SiteRegistry;

fn bench_routes(c: &mut Criterion) {
    let site = SiteRegistry::new();
    let mut group = c.benchmark_group("render_route");
    for route in site.routes() {
        group.bench_with_input(BenchmarkId::from_parameter(route), route, |b, route| {
            b.iter(|| site.render(black_box(route)).map(|html| html.len()))
        });
    }
    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let configs: Vec<_> = therapies::all().into_iter().chain(groupal::all()).collect();
    c.bench_function("compose_all_configs", |b| {
        b.iter(|| {
            configs
                .iter()
                .map(|config| compose(black_box(config)).sections.len())
                .sum::<usize>()
        })
    });
}

fn bench_gallery_fragment(c: &mut Criterion) {
    let site = SiteRegistry::new();
    let items = match site.carousel("mbct") {
        Ok(empc_site::site::CarouselSource::Gallery { items, .. }) => items.to_vec(),
        _ => return,
    };
    let Some(start) = CarouselState::at(items.len(), 1) else {
        return;
    };
    c.bench_function("gallery_next_fragment", |b| {
        b.iter(|| {
            let mut state = black_box(start.clone());
            state.next();
            widgets::gallery("mbct", &items, &state).map(|html| html.len())
        })
    });
}

criterion_group!(benches, bench_routes, bench_compose, bench_gallery_fragment);
criterion_main!(benches);
