use vigil_theme::{
    resolve, resolve_color, resolve_shadow, ComponentKind, Density, PrimaryColor, RadiusLevel,
    ShadowMode, Size, StyleRequest, ThemeSettings, ThemeState, Variant,
};

fn every_theme() -> Vec<ThemeSettings> {
    let mut themes = Vec::new();
    for primary_color in PrimaryColor::all() {
        for border_radius in RadiusLevel::all() {
            for density in Density::all() {
                for shadow_mode in ShadowMode::all() {
                    themes.push(ThemeSettings {
                        primary_color: *primary_color,
                        border_radius: *border_radius,
                        density: *density,
                        shadow_mode: *shadow_mode,
                    });
                }
            }
        }
    }
    themes
}

fn every_declared_request() -> Vec<StyleRequest> {
    let mut requests = Vec::new();
    for kind in ComponentKind::all() {
        for variant in kind.variants() {
            for size in Size::all() {
                requests.push(StyleRequest::new(*kind, *variant).size(*size));
                requests.push(
                    StyleRequest::new(*kind, *variant)
                        .size(*size)
                        .hoverable(true)
                        .disabled(true),
                );
            }
        }
    }
    requests
}

#[test]
fn every_declared_pair_resolves_under_every_theme() {
    let requests = every_declared_request();
    for theme in every_theme() {
        for request in &requests {
            for density in [None, Some(Density::Compact), Some(Density::Normal)] {
                let request = StyleRequest {
                    density_override: density,
                    ..*request
                };
                let result = resolve(&theme, &request);
                assert!(result.is_ok(), "{theme:?} {request:?}: {result:?}");
            }
        }
    }
}

#[test]
fn resolution_is_deterministic() {
    let requests = every_declared_request();
    for theme in every_theme() {
        for request in &requests {
            assert_eq!(resolve(&theme, request), resolve(&theme, request));
        }
    }
}

#[test]
fn undeclared_pairs_fail_under_every_theme() {
    for theme in every_theme() {
        for kind in ComponentKind::all() {
            for variant in Variant::all().iter().filter(|v| !kind.declares(**v)) {
                let err = resolve(&theme, &StyleRequest::new(*kind, *variant)).unwrap_err();
                assert_eq!(err.to_string(), format!("{kind} has no `{variant}` variant"));
            }
        }
    }
}

#[test]
fn density_never_changes_color_or_shadow() {
    let requests = every_declared_request();
    for theme in every_theme() {
        let flipped = ThemeSettings {
            density: match theme.density {
                Density::Compact => Density::Normal,
                Density::Normal => Density::Compact,
            },
            ..theme
        };
        for request in &requests {
            let a = resolve(&theme, request).unwrap();
            let b = resolve(&flipped, request).unwrap();
            assert_eq!(a.background, b.background);
            assert_eq!(a.hover_background, b.hover_background);
            assert_eq!(a.foreground, b.foreground);
            assert_eq!(a.border, b.border);
            assert_eq!(a.indicator, b.indicator);
            assert_eq!(a.focus, b.focus);
            assert_eq!(a.shadow, b.shadow);
            assert_eq!(a.shape, b.shape);
        }
    }
}

#[test]
fn density_moves_only_vertical_padding_of_fields() {
    for theme in every_theme() {
        let flipped = ThemeSettings {
            density: match theme.density {
                Density::Compact => Density::Normal,
                Density::Normal => Density::Compact,
            },
            ..theme
        };
        for kind in [ComponentKind::Input, ComponentKind::Select] {
            for size in Size::all() {
                for leading_icon in [false, true] {
                    let request = StyleRequest::new(kind, Variant::Default)
                        .size(*size)
                        .leading_icon(leading_icon);
                    let a = resolve(&theme, &request).unwrap();
                    let b = resolve(&flipped, &request).unwrap();
                    assert_eq!(a.spacing.padding_x, b.spacing.padding_x, "{kind}/{size}");
                    assert_eq!(a.spacing.text, b.spacing.text, "{kind}/{size}");
                    assert_eq!(a.leading_inset, b.leading_inset);
                    assert_ne!(a.spacing.padding_y, b.spacing.padding_y, "{kind}/{size}");
                }
            }
        }
    }
}

#[test]
fn primary_color_never_changes_shape_or_spacing() {
    let requests = every_declared_request();
    for theme in every_theme() {
        for color in PrimaryColor::all() {
            let recolored = ThemeSettings {
                primary_color: *color,
                ..theme
            };
            for request in &requests {
                let a = resolve(&theme, request).unwrap();
                let b = resolve(&recolored, request).unwrap();
                assert_eq!(a.shape, b.shape);
                assert_eq!(a.spacing, b.spacing);
                assert_eq!(a.leading_inset, b.leading_inset);
                assert_eq!(a.interaction, b.interaction);
            }
        }
    }
}

#[test]
fn primary_variants_follow_the_primary_color() {
    for theme in every_theme() {
        let token = resolve_color(theme.primary_color);

        let button = resolve(&theme, &StyleRequest::new(ComponentKind::Button, Variant::Primary)).unwrap();
        assert_eq!(button.background, token.base);
        assert_eq!(button.hover_background, Some(token.hover));

        let badge = resolve(&theme, &StyleRequest::new(ComponentKind::Badge, Variant::Primary)).unwrap();
        assert_eq!(badge.indicator, Some(token.accent));
        assert_eq!(badge.background, token.subtle);
    }
}

#[test]
fn danger_variants_ignore_the_primary_color() {
    let rose = resolve_color(PrimaryColor::Rose);
    for theme in every_theme() {
        let button = resolve(&theme, &StyleRequest::new(ComponentKind::Button, Variant::Danger)).unwrap();
        assert_eq!(button.background, rose.base);

        let badge = resolve(&theme, &StyleRequest::new(ComponentKind::Badge, Variant::Danger)).unwrap();
        assert_eq!(badge.background, rose.subtle);
        assert_eq!(badge.indicator, Some(rose.accent));
    }
}

#[test]
fn card_elevation_policy() {
    for theme in every_theme() {
        let card = resolve(&theme, &StyleRequest::new(ComponentKind::Card, Variant::Default)).unwrap();
        let border = card.border.expect("cards always carry a border");
        assert!(border.width > 0.0);
        match theme.shadow_mode {
            ShadowMode::None => assert!(card.shadow.is_none()),
            ShadowMode::Soft => {
                assert_eq!(card.shadow, resolve_shadow(ShadowMode::Soft, None));
            }
            ShadowMode::Hard => {
                assert_eq!(card.shadow, resolve_shadow(ShadowMode::Hard, None));
            }
        }
    }
}

#[test]
fn soft_primary_button_takes_the_primary_tint() {
    for color in PrimaryColor::all() {
        let theme = ThemeSettings {
            primary_color: *color,
            shadow_mode: ShadowMode::Soft,
            ..ThemeSettings::default()
        };
        let button = resolve(&theme, &StyleRequest::new(ComponentKind::Button, Variant::Primary)).unwrap();
        assert_eq!(button.shadow.shadow.color, resolve_color(*color).shadow);

        for variant in [Variant::Secondary, Variant::Danger, Variant::Ghost, Variant::Outline, Variant::Success] {
            let other = resolve(&theme, &StyleRequest::new(ComponentKind::Button, variant)).unwrap();
            assert_ne!(other.shadow.shadow.color, resolve_color(*color).shadow, "{variant}");
        }
    }
}

#[test]
fn radius_none_is_square_everywhere() {
    let requests = every_declared_request();
    for theme in every_theme()
        .into_iter()
        .filter(|t| t.border_radius == RadiusLevel::None)
    {
        for request in &requests {
            let spec = resolve(&theme, request).unwrap();
            assert_eq!(spec.shape.px, 0.0, "{request:?}");
            assert_eq!(spec.shape.class, "rounded-none");
        }
    }
}

#[test]
fn input_focus_follows_primary_color_regardless_of_other_dimensions() {
    for theme in every_theme() {
        let token = resolve_color(theme.primary_color);
        for kind in [ComponentKind::Input, ComponentKind::Select] {
            let spec = resolve(&theme, &StyleRequest::new(kind, Variant::Default)).unwrap();
            let focus = spec.focus.expect("fields always carry a focus ring");
            assert_eq!(focus.border, token.accent);
            assert_eq!(focus.ring.with_alpha(1.0), token.accent);
        }
    }
}

#[test]
fn theme_state_resolves_its_latest_snapshot() {
    let theme = ThemeState::default();
    let request = StyleRequest::new(ComponentKind::Button, Variant::Primary);

    for color in PrimaryColor::all() {
        theme.set_primary_color(*color);
        let spec = theme.resolve(&request).unwrap();
        assert_eq!(spec.background, resolve_color(*color).base);
    }
}
