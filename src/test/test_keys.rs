mod test {
    use Input::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_key_collected_every_matching_lock_disappears() {
        let mut game = GameTestState::new(
            r#"
########
#@k l  #
#   l  #
#  L   #
########
"#,
        );
        game.press(Right);
        game.assert_matches(
            r#"
########
# @    #
#      #
#  L   #
########
"#,
        );
    }

    #[test]
    fn when_key_collected_other_keys_remain() {
        let mut game = GameTestState::new(
            r#"
#@k k l#
"#,
        );
        game.press(Right);
        game.assert_matches(
            r#"
# @ k  #
"#,
        );
    }

    #[test]
    fn when_blue_key_collected_only_blue_locks_disappear() {
        let mut game = GameTestState::new(
            r#"
#@K L l#
"#,
        );
        game.press(Right);
        game.assert_matches(
            r#"
# @   l#
"#,
        );
    }

    #[test]
    fn when_key_collected_vertically_locks_disappear_too() {
        let mut game = GameTestState::new(
            r#"
#@#
#k#
#l#
###
"#,
        );
        game.press(Down);
        game.assert_matches(
            r#"
# #
#@#
# #
###
"#,
        );
    }

    #[test]
    fn only_matching_locks_fit_a_key_id() {
        let id = KeyId(1);
        assert!(Tile::Lock(KeyId(1)).fits(id));
        assert!(!Tile::Lock(KeyId(2)).fits(id));

        // every non-lock variant answers false, so a sweep can never
        // remove anything but locks
        assert!(!Tile::Air.fits(id));
        assert!(!Tile::Flux.fits(id));
        assert!(!Tile::Unbreakable.fits(id));
        assert!(!Tile::Player.fits(id));
        assert!(!Tile::Stone(FallingState::Resting).fits(id));
        assert!(!Tile::Box(FallingState::Falling).fits(id));
        assert!(!Tile::Key(KeyId(1)).fits(id));
    }

    #[test]
    fn remove_strategy_sweeps_only_its_own_locks() {
        let strategy = RemoveStrategy::new(KeyId(2));
        assert!(strategy.check(Tile::Lock(KeyId(2))));
        assert!(!strategy.check(Tile::Lock(KeyId(1))));
        assert!(!strategy.check(Tile::Key(KeyId(2))));
    }

    #[test]
    fn key_configurations_pair_color_id_and_removal_scope() {
        let yellow = KeyId(1).configuration();
        assert_eq!(yellow.id, KeyId(1));
        assert_eq!(yellow.color, (0xff, 0xcc, 0x00));
        assert_eq!(yellow.removes, RemoveStrategy::new(KeyId(1)));

        let blue = KeyId(2).configuration();
        assert_eq!(blue.id, KeyId(2));
        assert_eq!(blue.color, (0x00, 0xcc, 0xff));
        assert_eq!(blue.removes, RemoveStrategy::new(KeyId(2)));
    }
}
