use super::*;

fn hidden_panels(state: &TabsState) -> Vec<ProductTab> {
    ProductTab::ALL
        .into_iter()
        .filter(|tab| panel_hidden(state, *tab))
        .collect()
}

#[test]
fn default_state_shows_only_reviews_panel() {
    let state = TabsState::default();
    assert!(!panel_hidden(&state, ProductTab::Reviews));
    assert_eq!(
        hidden_panels(&state),
        vec![ProductTab::MakeReview, ProductTab::Shipping, ProductTab::Details]
    );
}

#[test]
fn each_selection_leaves_exactly_one_panel_unhidden() {
    let mut state = TabsState::default();
    for selected in ProductTab::ALL {
        state.select_tab(selected);
        let hidden = hidden_panels(&state);
        assert_eq!(hidden.len(), ProductTab::ALL.len() - 1);
        assert!(!hidden.contains(&selected));
    }
}

#[test]
fn reselecting_previous_tab_hides_the_other_again() {
    let mut state = TabsState::default();
    state.select_tab(ProductTab::Details);
    state.select_tab(ProductTab::Reviews);
    assert!(panel_hidden(&state, ProductTab::Details));
    assert!(!panel_hidden(&state, ProductTab::Reviews));
}
