//! Structural control flow: switches, button groups, keyed collections.

use std::cell::RefCell;
use std::rc::Rc;

use trellis::prelude::*;
use trellis_harness::{Button, Label, Pane, TestHost, as_cell, pane, with_element};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Screen {
    Home,
    Settings,
    About,
}

impl EnumValue for Screen {
    fn all() -> &'static [Self] {
        &[Screen::Home, Screen::Settings, Screen::About]
    }

    fn tag(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Settings => "Settings",
            Screen::About => "About",
        }
    }
}

struct App {
    screen: Screen,
    employees: Vec<Ctx<Employee>>,
}

#[derive(Clone)]
struct Employee {
    id: String,
    name: String,
}

fn employee(id: &str, name: &str) -> Ctx<Employee> {
    Ctx::new(Employee {
        id: id.into(),
        name: name.into(),
    })
}

fn app() -> App {
    App {
        screen: Screen::Home,
        employees: vec![employee("e1", "Arne"), employee("e2", "Benny")],
    }
}

type AppRoot = Root<TestHost, App, Pane>;

fn setup() -> (Ctx<App>, Rc<RefCell<Pane>>, AppRoot) {
    (Ctx::new(app()), pane("screen"), Root::new())
}

fn describe_switch(ui: &mut Binder<TestHost, App, Pane>) -> Result<()> {
    ui.enum_switch(
        "body",
        "switch",
        |app: &App| app.screen,
        |sw| {
            sw.case(Screen::Home, "home", Ctx::clone, |b| {
                b.label("greeting", "", |_| "welcome".to_string())?;
                Ok(())
            })?
            .case(Screen::Settings, "settings", Ctx::clone, |b| {
                b.pane("options", "", |_| Ok(()))?;
                Ok(())
            })?
            .case(Screen::About, "about", Ctx::clone, |_| Ok(()))?;
            Ok(())
        },
    )?;
    Ok(())
}

#[test]
fn switch_materializes_exactly_the_matching_case() {
    let (ctx, screen, mut root) = setup();
    let cell = as_cell(&screen);

    root.pass(&ctx, &screen, describe_switch).expect("pass 1");
    let names = |cell: &ElementCell| {
        trellis_harness::find(cell, "body")
            .borrow()
            .base()
            .child_names()
    };
    assert_eq!(names(&cell), vec!["Home"]);
    with_element::<Label, _>(&cell, "body/Home/greeting", |l| {
        assert_eq!(l.text(), "welcome");
    });

    ctx.with_mut(|app| app.screen = Screen::Settings);
    let stats = root.pass(&ctx, &screen, describe_switch).expect("pass 2");
    assert_eq!(names(&cell), vec!["Settings"]);
    assert_eq!(stats.pruned, 2, "the previous case subtree is swept");

    // Flipping back creates the Home subtree from scratch.
    ctx.with_mut(|app| app.screen = Screen::Home);
    let stats = root.pass(&ctx, &screen, describe_switch).expect("pass 3");
    assert_eq!(names(&cell), vec!["Home"]);
    assert_eq!(stats.created, 2);
}

#[test]
fn switch_rejects_duplicate_case_values() {
    let (ctx, screen, mut root) = setup();

    let err = root
        .pass(&ctx, &screen, |ui| {
            ui.enum_switch(
                "body",
                "",
                |app: &App| app.screen,
                |sw| {
                    sw.case(Screen::Home, "", Ctx::clone, |_| Ok(()))?
                        .case(Screen::Home, "", Ctx::clone, |_| Ok(()))?;
                    Ok(())
                },
            )?;
            Ok(())
        })
        .expect_err("two cases for one value is a description bug");
    assert!(matches!(err, Error::DuplicateCase { ref tag, .. } if tag == "Home"));
}

fn describe_buttons(ui: &mut Binder<TestHost, App, Pane>) -> Result<()> {
    ui.enum_buttons(
        "nav",
        "toolbar",
        lens!(App, screen),
        |group| {
            group
                .button(Screen::Home, "Home", "btn")
                .button(Screen::Settings, "Setup", "btn wide");
        },
        "active",
    )?;
    Ok(())
}

#[test]
fn enum_buttons_track_the_bound_member() {
    let (ctx, screen, mut root) = setup();
    let cell = as_cell(&screen);

    root.pass(&ctx, &screen, describe_buttons).expect("pass 1");

    let active = |path: &str| {
        with_element::<Button, _>(&cell, path, |b| b.base().classes().contains("active"))
    };
    assert!(active("nav/Home"));
    assert!(!active("nav/Settings"));
    with_element::<Button, _>(&cell, "nav/Settings", |b| {
        assert_eq!(b.text(), "Setup");
        assert!(b.base().classes().contains("wide"));
    });

    // Clicking writes through the lens immediately...
    with_element::<Button, _>(&cell, "nav/Settings", Button::press);
    assert_eq!(ctx.with(|app| app.screen), Screen::Settings);

    // ...and the next pass moves the active class.
    root.pass(&ctx, &screen, describe_buttons).expect("pass 2");
    assert!(!active("nav/Home"));
    assert!(active("nav/Settings"));
}

#[test]
fn enum_buttons_reorder_reuses_nodes() {
    let (ctx, screen, mut root) = setup();

    root.pass(&ctx, &screen, describe_buttons).expect("pass 1");

    // Same values, opposite declaration order: identity is value-keyed.
    let stats = root
        .pass(&ctx, &screen, |ui| {
            ui.enum_buttons(
                "nav",
                "toolbar",
                lens!(App, screen),
                |group| {
                    group
                        .button(Screen::Settings, "Setup", "btn wide")
                        .button(Screen::Home, "Home", "btn");
                },
                "active",
            )?;
            Ok(())
        })
        .expect("pass 2");
    assert_eq!(stats.created, 0);
    assert_eq!(stats.pruned, 0);
}

fn describe_roster(ui: &mut Binder<TestHost, App, Pane>) -> Result<()> {
    ui.for_each(
        "roster",
        "list",
        |app: &App| app.employees.clone(),
        |e: &Employee| e.id.clone(),
        "row",
        |row| {
            row.label("name", "", |e: &Employee| e.name.clone())?;
            Ok(())
        },
    )?;
    Ok(())
}

#[test]
fn for_each_keys_rows_by_identity() {
    let (ctx, screen, mut root) = setup();
    let cell = as_cell(&screen);

    root.pass(&ctx, &screen, describe_roster).expect("pass 1");
    let roster = trellis_harness::find(&cell, "roster");
    assert_eq!(roster.borrow().base().child_names(), vec!["e1", "e2"]);
    with_element::<Label, _>(&cell, "roster/e1/name", |l| assert_eq!(l.text(), "Arne"));

    let e1_row = trellis_harness::find(&cell, "roster/e1");

    // Append one, drop one: only the delta reconciles.
    ctx.with_mut(|app| {
        app.employees.push(employee("e3", "Steve"));
        app.employees.retain(|e| e.with(|e| e.id != "e2"));
    });
    let stats = root.pass(&ctx, &screen, describe_roster).expect("pass 2");
    assert_eq!(roster.borrow().base().child_names(), vec!["e1", "e3"]);
    assert_eq!(stats.pruned, 2, "row pane and its label");

    // Surviving rows keep their element identity.
    let e1_again = trellis_harness::find(&cell, "roster/e1");
    assert!(Rc::ptr_eq(&e1_row, &e1_again));

    // Row labels track their own row context.
    ctx.with(|app| app.employees[0].with_mut(|e| e.name = "Arne Sr.".into()));
    root.pass(&ctx, &screen, describe_roster).expect("pass 3");
    with_element::<Label, _>(&cell, "roster/e1/name", |l| {
        assert_eq!(l.text(), "Arne Sr.");
    });
}

#[test]
fn for_each_duplicate_keys_fail() {
    let (ctx, screen, mut root) = setup();
    ctx.with_mut(|app| app.employees.push(employee("e1", "Imposter")));

    let err = root
        .pass(&ctx, &screen, describe_roster)
        .expect_err("two rows share a key");
    assert!(matches!(err, Error::DuplicateVisit { ref name, .. } if name == "e1"));
}

#[test]
fn optional_composes_with_switch() {
    let (ctx, screen, mut root) = setup();
    let cell = as_cell(&screen);

    let describe = |ui: &mut Binder<TestHost, App, Pane>| {
        ui.optional(
            |app| app.screen == Screen::Home,
            |ui| {
                ui.pane("banner", "", |_| Ok(()))?;
                Ok(())
            },
        )?;
        describe_switch(ui)
    };

    root.pass(&ctx, &screen, describe).expect("pass 1");
    assert!(screen.borrow().base().find_child("banner").is_some());

    ctx.with_mut(|app| app.screen = Screen::About);
    root.pass(&ctx, &screen, describe).expect("pass 2");
    assert!(screen.borrow().base().find_child("banner").is_none());
    with_element::<Pane, _>(&cell, "body/About", |_| ());
}
