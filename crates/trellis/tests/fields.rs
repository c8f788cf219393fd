//! Field binders: pull/push flow, edit locks, static configuration.

use std::cell::RefCell;
use std::rc::Rc;

use trellis::prelude::*;
use trellis_harness::{
    Dropdown, FloatInput, IntInput, Label, Pane, Slider, TestHost, TextInput, Toggle, as_cell,
    pane, with_element, with_element_mut,
};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Quality {
    Low,
    Medium,
    High,
}

impl EnumValue for Quality {
    fn all() -> &'static [Self] {
        &[Quality::Low, Quality::Medium, Quality::High]
    }

    fn tag(&self) -> &'static str {
        match self {
            Quality::Low => "Low",
            Quality::Medium => "Medium",
            Quality::High => "High",
        }
    }
}

struct Settings {
    counter: i32,
    volume: f64,
    muted: bool,
    player: String,
    retries: i64,
    ratio: f64,
    unit: usize,
    quality: Quality,
}

fn settings() -> Settings {
    Settings {
        counter: 0,
        volume: 2.0,
        muted: false,
        player: "anon".into(),
        retries: 3,
        ratio: 0.5,
        unit: 0,
        quality: Quality::Low,
    }
}

type SettingsRoot = Root<TestHost, Settings, Pane>;

fn setup() -> (Ctx<Settings>, Rc<RefCell<Pane>>, SettingsRoot) {
    (Ctx::new(settings()), pane("screen"), Root::new())
}

#[test]
fn label_renders_and_tracks_external_changes() {
    let (ctx, screen, mut root) = setup();
    let cell = as_cell(&screen);

    let describe = |ui: &mut Binder<TestHost, Settings, Pane>| {
        ui.label("counter", "", |s: &Settings| s.counter.to_string())?;
        Ok(())
    };

    root.pass(&ctx, &screen, describe).expect("pass 1");
    with_element::<Label, _>(&cell, "counter", |l| assert_eq!(l.text(), "0"));

    ctx.with_mut(|s| s.counter = 5);
    root.pass(&ctx, &screen, describe).expect("pass 2");
    with_element::<Label, _>(&cell, "counter", |l| assert_eq!(l.text(), "5"));
}

#[test]
fn slider_pulls_pushes_and_keeps_static_bounds() {
    let (ctx, screen, mut root) = setup();
    let cell = as_cell(&screen);

    let describe = |ui: &mut Binder<TestHost, Settings, Pane>| {
        ui.slider(
            "volume",
            "Volume",
            "row",
            0.0,
            10.0,
            |s: &Settings| s.volume,
            |s, v| s.volume = v,
        )?;
        Ok(())
    };

    root.pass(&ctx, &screen, describe).expect("pass 1");
    with_element::<Slider, _>(&cell, "volume", |s| {
        assert_eq!(s.label(), "Volume");
        assert_eq!(s.range(), (0.0, 10.0));
        assert_eq!(s.value(), 2.0);
    });

    // User drags: the push direction updates the context synchronously.
    with_element_mut::<Slider, _>(&cell, "volume", |s| s.drag(7.0));
    assert_eq!(ctx.with(|s| s.volume), 7.0);

    // External change: the next pull refreshes the element.
    ctx.with_mut(|s| s.volume = 4.0);
    root.pass(&ctx, &screen, describe).expect("pass 2");
    with_element::<Slider, _>(&cell, "volume", |s| assert_eq!(s.value(), 4.0));

    // Bounds were creation-time configuration and still clamp.
    with_element_mut::<Slider, _>(&cell, "volume", |s| s.drag(99.0));
    assert_eq!(ctx.with(|s| s.volume), 10.0);
}

#[test]
fn toggle_lens_round_trips() {
    let (ctx, screen, mut root) = setup();
    let cell = as_cell(&screen);

    let describe = |ui: &mut Binder<TestHost, Settings, Pane>| {
        ui.toggle_lens("muted", "Mute", "", lens!(Settings, muted))?;
        Ok(())
    };

    root.pass(&ctx, &screen, describe).expect("pass 1");
    with_element::<Toggle, _>(&cell, "muted", |t| assert!(!t.value()));

    with_element_mut::<Toggle, _>(&cell, "muted", Toggle::flip);
    assert!(ctx.with(|s| s.muted));

    ctx.with_mut(|s| s.muted = false);
    root.pass(&ctx, &screen, describe).expect("pass 2");
    with_element::<Toggle, _>(&cell, "muted", |t| assert!(!t.value()));
}

#[test]
fn text_field_lock_protects_the_edit_in_progress() {
    let (ctx, screen, mut root) = setup();
    let cell = as_cell(&screen);

    let describe = |ui: &mut Binder<TestHost, Settings, Pane>| {
        ui.text_field_lens("player", "Player", "", lens!(Settings, player))?;
        Ok(())
    };

    root.pass(&ctx, &screen, describe).expect("pass 1");
    with_element::<TextInput, _>(&cell, "player", |t| assert_eq!(t.value(), "anon"));

    // Focus and start typing; the push side lands in the context at once.
    with_element_mut::<TextInput, _>(&cell, "player", |t| {
        t.set_focus(true);
        t.type_text("Sig");
    });
    assert_eq!(ctx.with(|s| s.player.clone()), "Sig");

    // External writes must not clobber the focused element, pass after pass.
    for step in 0..3 {
        ctx.with_mut(|s| s.player = format!("remote-{step}"));
        root.pass(&ctx, &screen, describe).expect("locked pass");
        with_element::<TextInput, _>(&cell, "player", |t| assert_eq!(t.value(), "Sig"));
    }

    // Blur: the next pass resyncs from the context.
    with_element_mut::<TextInput, _>(&cell, "player", |t| t.set_focus(false));
    root.pass(&ctx, &screen, describe).expect("unlocked pass");
    with_element::<TextInput, _>(&cell, "player", |t| assert_eq!(t.value(), "remote-2"));
}

#[test]
fn int_and_float_fields_bind_both_directions() {
    let (ctx, screen, mut root) = setup();
    let cell = as_cell(&screen);

    let describe = |ui: &mut Binder<TestHost, Settings, Pane>| {
        ui.int_field(
            "retries",
            "Retries",
            "",
            |s: &Settings| s.retries,
            |s, v| s.retries = v,
        )?
        .float_field_lens("ratio", "Ratio", "", lens!(Settings, ratio))?;
        Ok(())
    };

    root.pass(&ctx, &screen, describe).expect("pass 1");
    with_element::<IntInput, _>(&cell, "retries", |f| assert_eq!(f.value(), 3));
    with_element::<FloatInput, _>(&cell, "ratio", |f| assert_eq!(f.value(), 0.5));

    with_element_mut::<IntInput, _>(&cell, "retries", |f| f.edit(8));
    with_element_mut::<FloatInput, _>(&cell, "ratio", |f| f.edit(0.75));
    assert_eq!(ctx.with(|s| s.retries), 8);
    assert_eq!(ctx.with(|s| s.ratio), 0.75);

    ctx.with_mut(|s| s.retries = 1);
    root.pass(&ctx, &screen, describe).expect("pass 2");
    with_element::<IntInput, _>(&cell, "retries", |f| assert_eq!(f.value(), 1));
}

#[test]
fn dropdown_locks_while_open() {
    let (ctx, screen, mut root) = setup();
    let cell = as_cell(&screen);

    let describe = |ui: &mut Binder<TestHost, Settings, Pane>| {
        ui.dropdown(
            "unit",
            "Unit",
            "",
            vec!["mm".into(), "inch".into(), "pt".into()],
            |s: &Settings| s.unit,
            |s, v| s.unit = v,
        )?;
        Ok(())
    };

    root.pass(&ctx, &screen, describe).expect("pass 1");
    with_element::<Dropdown, _>(&cell, "unit", |d| {
        assert_eq!(d.choices(), ["mm", "inch", "pt"]);
        assert_eq!(d.value(), 0);
    });

    // Open popup: external changes stop reaching the element.
    with_element_mut::<Dropdown, _>(&cell, "unit", |d| d.set_open(true));
    ctx.with_mut(|s| s.unit = 2);
    root.pass(&ctx, &screen, describe).expect("locked pass");
    with_element::<Dropdown, _>(&cell, "unit", |d| assert_eq!(d.value(), 0));

    // Picking closes the popup and pushes the choice.
    with_element_mut::<Dropdown, _>(&cell, "unit", |d| d.pick(1));
    assert_eq!(ctx.with(|s| s.unit), 1);

    root.pass(&ctx, &screen, describe).expect("unlocked pass");
    with_element::<Dropdown, _>(&cell, "unit", |d| assert_eq!(d.value(), 1));
}

#[test]
fn enum_field_maps_variants_through_the_choice_list() {
    let (ctx, screen, mut root) = setup();
    let cell = as_cell(&screen);

    let describe = |ui: &mut Binder<TestHost, Settings, Pane>| {
        ui.enum_field_lens("quality", "Quality", "", lens!(Settings, quality))?;
        Ok(())
    };

    root.pass(&ctx, &screen, describe).expect("pass 1");
    with_element::<Dropdown, _>(&cell, "quality", |d| {
        assert_eq!(d.choices(), ["Low", "Medium", "High"]);
        assert_eq!(d.value(), 0);
    });

    // User picks the second tag: the variant lands in the context.
    with_element_mut::<Dropdown, _>(&cell, "quality", |d| d.pick(1));
    assert_eq!(ctx.with(|s| s.quality), Quality::Medium);

    // External variant change pulls back into the element.
    ctx.with_mut(|s| s.quality = Quality::High);
    root.pass(&ctx, &screen, describe).expect("pass 2");
    with_element::<Dropdown, _>(&cell, "quality", |d| assert_eq!(d.value(), 2));
}

#[test]
fn button_statics_are_fixed_at_creation() {
    let (ctx, screen, mut root) = setup();
    let cell = as_cell(&screen);

    for caption in ["Start", "Changed"] {
        root.pass(&ctx, &screen, |ui| {
            ui.button("go", caption, "btn", |ctx| {
                ctx.with_mut(|s| s.counter += 1);
            })?;
            Ok(())
        })
        .expect("pass");
    }

    with_element::<trellis_harness::Button, _>(&cell, "go", |b| {
        assert_eq!(b.text(), "Start", "button text is creation-time only");
        b.press();
    });
    assert_eq!(ctx.with(|s| s.counter), 1);
}

#[test]
fn editable_state_survives_reconciliation() {
    let (ctx, screen, mut root) = setup();
    let cell = as_cell(&screen);

    let describe = |ui: &mut Binder<TestHost, Settings, Pane>| {
        ui.text_field_lens("player", "Player", "", lens!(Settings, player))?;
        Ok(())
    };

    root.pass(&ctx, &screen, describe).expect("pass 1");
    let before = trellis_harness::find(&cell, "player");

    for _ in 0..5 {
        root.pass(&ctx, &screen, describe).expect("repeat pass");
    }
    let after = trellis_harness::find(&cell, "player");
    assert!(
        Rc::ptr_eq(&before, &after),
        "the element must persist across passes, not be rebuilt"
    );
}
