#[cfg(test)]
mod tests {
    use nalgebra::distance;

    use crate::kinematic_traits::{IkFailure, Kinematics, Point};
    use crate::kinematics_impl::PlanarKinematics;
    use crate::parameters::Parameters;
    use crate::path_plan::sequencer::{Mode, PickAndPlace, PlayState};
    use crate::planning_error::{StartError, WaypointError};
    use crate::tests::test_utils::{effector, play, reference_session, REACHABLE};
    use crate::utils::{assert_joints_eq, dump_frames};

    #[test]
    fn test_reference_arm_reaches_picked_point() {
        let robot = PlanarKinematics::new(Parameters::default());
        let target = Point::new(0.9, 0.4);
        let joints = robot.inverse(&target).expect("Point must be reachable");
        let pose = robot.forward(&joints);
        assert!(
            distance(&pose.effector, &target) < 1e-3,
            "Forward kinematics gives {:?}",
            pose.effector
        );
        assert!(robot.limits().compliant(&joints));
    }

    #[test]
    fn test_far_point_has_no_solution() {
        let robot = PlanarKinematics::new(Parameters::default());
        assert!(robot.inverse(&Point::new(5.0, 5.0)).is_none());
        match robot.solve(&Point::new(5.0, 5.0), true) {
            Err(IkFailure::TooFar { distance, reach }) => {
                assert!((distance - 50.0_f64.sqrt()).abs() < 1e-12);
                assert!((reach - 1.9).abs() < 1e-12);
            }
            other => panic!("Expected TooFar, got {:?}", other),
        }
    }

    #[test]
    fn test_two_waypoints_give_eleven_frames() {
        let mut session = reference_session(&REACHABLE[..2]).expect("Session");
        let first = session.waypoints()[0].joints;
        let second = session.waypoints()[1].joints;

        let queued = session.start(Mode::Normal, 10).expect("Start must succeed");
        assert_eq!(queued, 11);
        assert_eq!(session.play_state(), PlayState::Running);

        let frames = play(&mut session);
        dump_frames(&frames);
        assert_eq!(frames.len(), 11);
        assert_eq!(frames[0].joints, first);
        assert_eq!(frames[10].joints, second);
        assert_eq!(session.play_state(), PlayState::Idle);

        // Steps are labelled in order and time only grows
        for (k, pair) in frames.windows(2).enumerate() {
            assert_eq!(pair[0].step, k);
            assert!(pair[1].elapsed > pair[0].elapsed);
        }
    }

    #[test]
    fn test_unreachable_drop_off_rejects_start() {
        let mut session = reference_session(&REACHABLE[..1]).expect("Session");
        session.set_pick_and_place(PickAndPlace {
            drop_off: Point::new(5.0, 5.0),
            ..PickAndPlace::default()
        });

        match session.start(Mode::PickAndPlace, 10) {
            Err(StartError::DropOffUnreachable { drop_off, reason }) => {
                assert_eq!(drop_off, Point::new(5.0, 5.0));
                assert!(matches!(reason, IkFailure::TooFar { .. }));
            }
            other => panic!("Expected DropOffUnreachable, got {:?}", other),
        }
        assert_eq!(session.play_state(), PlayState::Idle);
        assert_eq!(session.queued_frames().count(), 0);
        assert!(session.tick().is_none());
    }

    #[test]
    fn test_non_finite_drop_off_rejects_start() {
        let mut session = reference_session(&REACHABLE[..1]).expect("Session");
        for drop_off in [Point::new(f64::NAN, 1.0), Point::new(0.0, f64::INFINITY)] {
            session.set_pick_and_place(PickAndPlace {
                drop_off,
                ..PickAndPlace::default()
            });
            match session.start(Mode::PickAndPlace, 4) {
                Err(StartError::DropOffUnreachable { reason, .. }) => {
                    assert_eq!(reason, IkFailure::NonFinite);
                }
                other => panic!("Expected DropOffUnreachable, got {:?}", other),
            }
            assert_eq!(session.play_state(), PlayState::Idle);
            assert_eq!(session.queued_frames().count(), 0);
        }
        assert!(matches!(
            session.try_add_waypoint(f64::NAN, 0.4),
            Err(WaypointError::Unreachable {
                reason: IkFailure::NonFinite,
                ..
            })
        ));
        assert!(session.live_probe(f64::NAN, f64::NAN).is_none());
    }

    #[test]
    fn test_path_passes_through_every_waypoint() {
        let robot = PlanarKinematics::new(Parameters::default());
        let mut session = reference_session(&REACHABLE).expect("Session");
        session.start(Mode::Normal, 6).expect("Start must succeed");
        let frames = play(&mut session);
        assert_eq!(frames.len(), 2 * 7);

        for (index, &(x, y)) in REACHABLE.iter().enumerate() {
            let target = Point::new(x, y);
            let frame = match index {
                0 => frames[0],
                1 => frames[6],
                _ => frames[13],
            };
            assert!(distance(&effector(&robot, &frame), &target) < 1e-9);
            assert_joints_eq(&frame.joints, &session.waypoints()[index].joints, 0.0);
        }
        // Time restarts on the second segment
        assert_eq!(frames[7].segment, 1);
        assert_eq!(frames[7].elapsed, 0.0);
    }
}
