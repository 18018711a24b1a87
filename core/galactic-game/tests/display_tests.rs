use galactic_game::display::{render_card, render_scoreboard, render_table, render_verdict};
use galactic_game::{GameState, ResolvedDraw};
use galactic_model::{Category, GameEntity, Outcome, Person, Starship};
use pretty_assertions::assert_eq;

fn alex() -> GameEntity {
    Person::new("Alex Nova")
        .with_id("1")
        .with_mass(77)
        .with_height(172)
        .with_gender("male")
        .into()
}

fn steel() -> GameEntity {
    Person::new("Captain Steel").with_id("2").with_mass(136).into()
}

fn resolved(left: GameEntity, right: GameEntity, outcome: Outcome, category: Category) -> GameState {
    let mut state = GameState::new(category);
    state.start_draw().unwrap();
    state
        .resolve_draw(ResolvedDraw {
            category,
            left,
            right,
            outcome,
        })
        .unwrap();
    state
}

#[test]
fn person_card_lists_stats() {
    let card = render_card("Player 1", Some(&alex()), false);

    assert_eq!(
        card,
        "[Player 1]\n  Alex Nova\n  Height (cm): 172\n  Gender: male\n  Mass (kg): 77\n"
    );
}

#[test]
fn starship_card_marks_winner() {
    let ship: GameEntity = Starship::new("Titan Station", 342953)
        .with_id("s2")
        .with_model("DS-1 Orbital Battle Platform")
        .into();
    let card = render_card("Player 2", Some(&ship), true);

    assert!(card.starts_with("[Player 2] ★ WINNER\n"));
    assert!(card.contains("  Model: DS-1 Orbital Battle Platform\n"));
    assert!(card.contains("  Crew Size: 342953\n"));
    assert!(!card.contains("Passengers"));
}

#[test]
fn person_without_mass_shows_zero() {
    let nameless: GameEntity = Person::new("Ghost").with_id("g").into();
    assert!(render_card("Player 1", Some(&nameless), false).contains("Mass (kg): 0"));
}

#[test]
fn empty_slot_shows_placeholder() {
    assert_eq!(
        render_card("Player 1", None, false),
        "[Player 1]\n  (no card drawn)\n"
    );
}

#[test]
fn verdict_names_the_criterion() {
    let people = resolved(alex(), steel(), Outcome::Right, Category::People);
    assert_eq!(render_verdict(&people).unwrap(), "Winner! (Higher Mass)");

    let ships = resolved(
        Starship::new("A", 5).with_id("a").into(),
        Starship::new("B", 5).with_id("b").into(),
        Outcome::Tie,
        Category::Starships,
    );
    assert_eq!(render_verdict(&ships).unwrap(), "It's a Tie! (Larger Crew)");
}

#[test]
fn no_verdict_before_first_draw() {
    assert!(render_verdict(&GameState::default()).is_none());
}

#[test]
fn scoreboard_shows_both_players() {
    let state = resolved(alex(), steel(), Outcome::Right, Category::People);
    assert_eq!(
        render_scoreboard(&state),
        "Score Board  Player 1: 0  |  Player 2: 1"
    );
}

#[test]
fn table_includes_error_message() {
    let mut state = resolved(alex(), steel(), Outcome::Right, Category::People);
    state.start_draw().unwrap();
    state.fail_draw("Failed to load data. Please try again.").unwrap();

    let table = render_table(&state);
    assert!(table.contains("[Player 2] ★ WINNER"));
    assert!(table.contains("Winner! (Higher Mass)"));
    assert!(table.ends_with("Error: Failed to load data. Please try again.\n"));
}

#[test]
fn idle_table_layout() {
    assert_eq!(
        render_table(&GameState::default()),
        "[Player 1]\n  (no card drawn)\n[Player 2]\n  (no card drawn)\n\
         Score Board  Player 1: 0  |  Player 2: 0\n"
    );
}
