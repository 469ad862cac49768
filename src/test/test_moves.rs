mod test {
    use Input::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_move_right_into_air_observes_move() {
        let mut game = GameTestState::new(
            r#"
#@ #
"#,
        );
        game.press(Right);
        game.assert_matches(
            r#"
# @#
"#,
        );
    }

    #[test]
    fn when_move_left_into_air_observes_move() {
        let mut game = GameTestState::new(
            r#"
# @#
"#,
        );
        game.press(Left);
        game.assert_matches(
            r#"
#@ #
"#,
        );
    }

    #[test]
    fn when_move_onto_flux_consumes_it() {
        let mut game = GameTestState::new(
            r#"
#@.#
"#,
        );
        game.press(Right);
        game.assert_matches(
            r#"
# @#
"#,
        );
    }

    #[test]
    fn when_move_into_wall_nothing_changes() {
        let mut game = GameTestState::new(
            r#"
#@#
"#,
        );
        let before = game.game.clone();
        game.press(Right);
        assert_eq!(before, game.game);
    }

    #[test]
    fn when_move_into_lock_nothing_changes() {
        let mut game = GameTestState::new(
            r#"
#@l#
"#,
        );
        let before = game.game.clone();
        game.press(Right);
        assert_eq!(before, game.game);
    }

    #[test]
    fn when_push_box_right_box_and_player_move() {
        let mut game = GameTestState::new(
            r#"
#@x #
"#,
        );
        game.press(Right);
        game.assert_matches(
            r#"
# @x#
"#,
        );
    }

    #[test]
    fn when_push_stone_left_stone_and_player_move() {
        let mut game = GameTestState::new(
            r#"
# o@#
"#,
        );
        game.press(Left);
        game.assert_matches(
            r#"
#o@ #
"#,
        );
    }

    #[test]
    fn when_push_into_wall_nothing_moves() {
        let mut game = GameTestState::new(
            r#"
#@x# #
"#,
        );
        let before = game.game.clone();
        game.press(Right);
        assert_eq!(before, game.game);
    }

    #[test]
    fn when_push_two_blocks_nothing_moves() {
        let mut game = GameTestState::new(
            r#"
#@xx #
"#,
        );
        let before = game.game.clone();
        game.press(Right);
        assert_eq!(before, game.game);
    }

    #[test]
    fn when_push_destination_lacks_support_nothing_moves() {
        let mut game = GameTestState::new(
            r#"
#@x  #
## ###
"#,
        );
        let before = game.game.clone();
        game.press(Right);
        assert_eq!(before, game.game);
    }

    #[test]
    fn when_push_falling_box_nothing_moves() {
        let mut game = GameTestState::new(
            r#"
#@X #
"#,
        );
        let before = game.game.clone();
        game.press(Right);
        assert_eq!(before, game.game);
    }

    #[test]
    fn when_falling_box_lands_it_becomes_pushable() {
        let mut game = GameTestState::new(
            r#"
#@X #
"#,
        );
        game.tick();
        game.assert_matches(
            r#"
#@x #
"#,
        );
        game.press(Right);
        game.assert_matches(
            r#"
# @x#
"#,
        );
    }

    #[test]
    fn when_move_up_into_air_observes_move() {
        let mut game = GameTestState::new(
            r#"
# #
#@#
###
"#,
        );
        game.press(Up);
        game.assert_matches(
            r#"
#@#
# #
###
"#,
        );
    }

    #[test]
    fn when_move_down_into_air_observes_move() {
        let mut game = GameTestState::new(
            r#"
#@#
# #
###
"#,
        );
        game.press(Down);
        game.assert_matches(
            r#"
# #
#@#
###
"#,
        );
    }

    #[test]
    fn when_push_stone_up_nothing_changes() {
        let mut game = GameTestState::new(
            r#"
#o#
#@#
###
"#,
        );
        let before = game.game.clone();
        game.press(Up);
        assert_eq!(before, game.game);
    }

    #[test]
    fn when_push_box_down_nothing_changes() {
        let mut game = GameTestState::new(
            r#"
#@#
#x#
###
"#,
        );
        let before = game.game.clone();
        game.press(Down);
        assert_eq!(before, game.game);
    }

    #[test]
    fn when_inputs_queue_in_one_tick_newest_runs_first() {
        let mut game = GameTestState::new(
            r#"
## #
#@ #
####
"#,
        );
        // Up is queued last, so it runs first and bounces off the wall;
        // Right then lands. First-in-first-out would end at the top.
        game.tick_with(&[Right, Up]);
        game.assert_matches(
            r#"
## #
# @#
####
"#,
        );
    }
}
