// Integration tests for replaying a journey end to end
//
// These drive a recap session the way the viewer does: pick a journey, play,
// tick from a frame clock, and read the markers back.

use std::sync::Arc;
use std::time::Duration;

use trailmate::playback::{FrameClock, STEP_INTERVAL};
use trailmate::trail::{TrailOffset, checkpoint_index, trail_path};
use trailmate::{JourneyStore, PlaybackPhase, PlaybackSpeed, RecapSession, position_of};

fn session_on(journey_id: &str) -> RecapSession {
    RecapSession::new(Arc::new(JourneyStore::builtin()), Some(journey_id))
}

#[test]
fn test_full_replay_of_every_builtin_journey() {
    let store = JourneyStore::builtin();
    for journey in store.list_journeys() {
        let mut session = session_on(&journey.id);
        let mut clock = FrameClock::new(STEP_INTERVAL);
        session.play();
        session.drive(&clock);

        let mut visited = Vec::new();
        while session.state().is_playing() {
            let checkpoint = session.current_checkpoint().unwrap().id;
            if visited.last() != Some(&checkpoint) {
                visited.push(checkpoint);
            }
            clock.next_frame();
            session.drive(&clock);
            assert!(clock.frames() < 1_000, "{} never finished", journey.name);
        }

        // every checkpoint is visited, in order, and playback stops on the last one
        assert_eq!(session.phase(), PlaybackPhase::Finished);
        assert_eq!(session.current_checkpoint().unwrap().name, "End Point");
        let expected: Vec<u32> = journey.checkpoints[..journey.checkpoints.len() - 1]
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(visited, expected);
    }
}

#[test]
fn test_markers_at_start_and_end() {
    let mut session = session_on("1");
    let journey = session.journey().unwrap().clone();

    for marker in session.markers().unwrap() {
        let path = trail_path(&journey, marker.participant).unwrap();
        assert_eq!(marker.position, path[0]);
    }

    session.seek(1.);
    for marker in session.markers().unwrap() {
        let path = trail_path(&journey, marker.participant).unwrap();
        assert_eq!(marker.position, *path.last().unwrap());
    }
}

#[test]
fn test_faster_speed_finishes_sooner() {
    let frames_to_finish = |speed: PlaybackSpeed| {
        let mut session = session_on("3");
        session.set_speed(speed);
        let mut clock = FrameClock::sixty_fps();
        session.play();
        session.drive(&clock);
        while session.state().is_playing() {
            clock.next_frame();
            session.drive(&clock);
        }
        clock.frames()
    };

    let half = frames_to_finish(PlaybackSpeed::Half);
    let normal = frames_to_finish(PlaybackSpeed::Normal);
    let quadruple = frames_to_finish(PlaybackSpeed::Quadruple);
    assert!(half > normal);
    assert!(normal > quadruple);
    // 5 seconds of playback at 1x, about 300 frames at 60 fps
    assert!((295..=305).contains(&normal), "took {} frames", normal);
}

#[test]
fn test_pause_resume_and_replay() {
    let mut session = session_on("2");
    session.play();
    session.tick(Duration::from_millis(0));
    session.tick(Duration::from_millis(2_000));
    session.pause();
    let paused = session.state().progress();
    assert!((paused - 0.4).abs() < 1e-9);

    // ticks while paused are ignored
    session.tick(Duration::from_millis(9_000));
    assert_eq!(session.state().progress(), paused);

    session.replay();
    assert_eq!(session.state().progress(), 0.);
    assert_eq!(session.phase(), PlaybackPhase::Stopped);
}

#[test]
fn test_scenario_ten_checkpoints_at_55_percent() {
    let store = JourneyStore::builtin();
    let journey = store.get_journey("1").unwrap();
    let bear = journey.participant(1).unwrap();

    assert_eq!(checkpoint_index(0.55, journey.checkpoints.len()), 4);
    let expected = TrailOffset::for_participant(bear).apply(&journey.checkpoints[4].position);
    assert_eq!(position_of(journey, bear, 0.55).unwrap(), expected);
}

#[test]
fn test_team_members_never_overlap() {
    let session = session_on("1");
    let markers = session.markers().unwrap();
    for (i, a) in markers.iter().enumerate() {
        for b in markers.iter().skip(i + 1) {
            assert_ne!(a.position, b.position);
        }
    }
}
