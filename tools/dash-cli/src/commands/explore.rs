//! Interactive explore command.

use anyhow::{bail, Result};
use dash_analytics::{DashboardSession, FacetValue};
use dialoguer::Select;

use super::report::print_kpis;
use crate::context::Context;

const CLEAR_ITEM: &str = "Clear filter";
const QUIT_ITEM: &str = "Quit";

/// What a menu selection does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Toggle the category at this menu index.
    Toggle(usize),
    Clear,
    Quit,
}

/// Menu lines: one per category, then clear and quit.
pub fn menu_items(menu: &[FacetValue], selected: Option<&str>) -> Vec<String> {
    menu.iter()
        .map(|v| {
            let marker = if selected == Some(v.full_label.as_str()) {
                "●"
            } else {
                " "
            };
            format!("{} {} ({})", marker, v.full_label, v.count)
        })
        .chain([CLEAR_ITEM.to_string(), QUIT_ITEM.to_string()])
        .collect()
}

/// Map a selected menu index to an action. Escape quits.
pub fn action(index: Option<usize>, menu_len: usize) -> Action {
    match index {
        Some(i) if i < menu_len => Action::Toggle(i),
        Some(i) if i == menu_len => Action::Clear,
        _ => Action::Quit,
    }
}

/// Run the explore command.
pub fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("explore is interactive and cannot be combined with --json");
    }

    let (catalog, description) = ctx.load_catalog()?;
    let mut session = ctx.timed(None, || DashboardSession::new(&catalog));

    ctx.output
        .info(&format!("Exploring {} ({} products)", description, catalog.len()));
    print_kpis(ctx, session.report());

    loop {
        let items = menu_items(session.menu(), session.selected());
        let default = session
            .selected()
            .and_then(|s| session.menu().iter().position(|v| v.full_label == s))
            .unwrap_or(0);

        let selection = Select::new()
            .with_prompt("Filter by category")
            .items(&items)
            .default(default)
            .interact_opt()?;

        match action(selection, session.menu().len()) {
            Action::Toggle(i) => {
                let category = session.menu()[i].full_label.clone();
                ctx.timed(Some(category.as_str()), || {
                    session.toggle(&category);
                });
            }
            Action::Clear => {
                if session.selected().is_none() {
                    ctx.output.info("No filter is active.");
                    continue;
                }
                ctx.timed(None, || {
                    session.clear();
                });
            }
            Action::Quit => break,
        }

        ctx.logger
            .debug_builder("filter changed")
            .field("filter", session.selected().unwrap_or("all"))
            .field_u64("total", session.report().kpis.total as u64)
            .field_bool("empty", session.report().is_empty())
            .emit();
        print_kpis(ctx, session.report());
    }

    ctx.output.debug(&format!("{} reports computed", session.recomputes()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Vec<FacetValue> {
        vec![FacetValue::new("Subwoofers", 4), FacetValue::new("Soundbars", 2)]
    }

    #[test]
    fn test_menu_items_mark_selection() {
        let items = menu_items(&menu(), Some("Soundbars"));
        assert_eq!(
            items,
            vec![
                "  Subwoofers (4)".to_string(),
                "● Soundbars (2)".to_string(),
                CLEAR_ITEM.to_string(),
                QUIT_ITEM.to_string(),
            ]
        );
    }

    #[test]
    fn test_action_mapping() {
        assert_eq!(action(Some(0), 2), Action::Toggle(0));
        assert_eq!(action(Some(1), 2), Action::Toggle(1));
        assert_eq!(action(Some(2), 2), Action::Clear);
        assert_eq!(action(Some(3), 2), Action::Quit);
        assert_eq!(action(None, 2), Action::Quit);
    }

    #[test]
    fn test_actions_drive_session() {
        let products = dash_catalog::Catalog::builtin();
        let mut session = DashboardSession::new(products);
        let first = session.menu()[0].full_label.clone();

        if let Action::Toggle(i) = action(Some(0), session.menu().len()) {
            let category = session.menu()[i].full_label.clone();
            session.toggle(&category);
        }
        assert_eq!(session.selected(), Some(first.as_str()));

        assert_eq!(action(Some(session.menu().len()), session.menu().len()), Action::Clear);
        session.clear();
        assert_eq!(session.selected(), None);
    }
}
