//! Style resolution runs once per primitive per render pass

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vigil_theme::{
    resolve, ComponentKind, PrimaryColor, Size, StyleRequest, ThemeSettings, ThemeState, Variant,
};

fn bench_resolve(c: &mut Criterion) {
    let settings = ThemeSettings {
        primary_color: PrimaryColor::Emerald,
        ..ThemeSettings::default()
    };
    let request = StyleRequest::new(ComponentKind::Button, Variant::Primary).size(Size::Lg);

    c.bench_function("resolve_button_primary", |b| {
        b.iter(|| resolve(black_box(&settings), black_box(&request)))
    });

    let hover_card = StyleRequest::new(ComponentKind::Card, Variant::Default).hoverable(true);
    c.bench_function("resolve_card_hover", |b| {
        b.iter(|| resolve(black_box(&settings), black_box(&hover_card)))
    });

    let theme = ThemeState::new(settings);
    c.bench_function("theme_state_resolve", |b| {
        b.iter(|| theme.resolve(black_box(&request)))
    });
}

fn bench_full_screen(c: &mut Criterion) {
    let settings = ThemeSettings::default();
    let requests: Vec<StyleRequest> = ComponentKind::all()
        .iter()
        .flat_map(|&kind| {
            kind.variants()
                .iter()
                .map(move |&variant| StyleRequest::new(kind, variant))
        })
        .collect();

    c.bench_function("resolve_every_declared_pair", |b| {
        b.iter(|| {
            for request in &requests {
                let _ = black_box(resolve(&settings, request));
            }
        })
    });
}

criterion_group!(benches, bench_resolve, bench_full_screen);
criterion_main!(benches);
