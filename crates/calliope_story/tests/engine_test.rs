// Tests for the story engine's state machine and cycle semantics.

mod test_utils;

use calliope_core::{ImageSource, Role};
use calliope_error::{CalliopeErrorKind, GenerationErrorKind, SessionErrorKind};
use calliope_story::StoryEngine;
use test_utils::{RecordingIllustrator, ScriptedDriver};

const FIRST_REPLY: &str = "A storm rolled in over the harbor.\n\
\n\
Options:\n\
1. Seek shelter in the lighthouse\n\
2. Board the ship anyway\n";

const SECOND_REPLY: &str = "The lighthouse keeper welcomed you inside.\n\
\n\
1. Ask about the storm\n\
2. Climb to the lamp room\n\
3. Rest by the fire\n";

const ENDING_REPLY: &str = "The ship sailed into calm waters at last.\n\nThe End\n\
\n\
1. A choice that should never be offered\n";

fn session_kind(err: &calliope_error::CalliopeError) -> &SessionErrorKind {
    match err.kind() {
        CalliopeErrorKind::Session(e) => &e.kind,
        other => panic!("expected session error, got {other}"),
    }
}

#[tokio::test]
async fn start_commits_one_turn_with_parsed_options() -> anyhow::Result<()> {
    let mut engine = StoryEngine::new(ScriptedDriver::always(FIRST_REPLY), RecordingIllustrator::none());

    let turn = engine.start("nautical").await?;
    assert_eq!(*turn.index(), 0);
    assert_eq!(turn.options().len(), 2);
    assert!(turn.narrative().contains("storm rolled in"));
    assert!(!turn.narrative().contains("Options:"));

    // System seed + user seed + assistant reply.
    let transcript = engine.state().transcript();
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[1].role, Role::User);
    assert!(transcript[1].content.contains("nautical"));
    assert_eq!(transcript[2].role, Role::Assistant);
    assert_eq!(transcript[2].content, FIRST_REPLY);
    Ok(())
}

#[tokio::test]
async fn choose_names_the_option_by_one_based_position() -> anyhow::Result<()> {
    let mut engine = StoryEngine::new(
        ScriptedDriver::new(vec![Ok(FIRST_REPLY.into()), Ok(SECOND_REPLY.into())]),
        RecordingIllustrator::none(),
    );

    engine.start("nautical").await?;
    engine.choose(0).await?;

    let transcript = engine.state().transcript();
    assert_eq!(transcript[3].content, "I choose option 1.");
    Ok(())
}

#[tokio::test]
async fn turn_indices_track_completed_cycles() -> anyhow::Result<()> {
    let mut engine = StoryEngine::new(
        ScriptedDriver::new(vec![Ok(FIRST_REPLY.into()), Ok(SECOND_REPLY.into())]),
        RecordingIllustrator::none(),
    );

    engine.start("nautical").await?;
    engine.choose(1).await?;

    let turns = engine.turns();
    assert_eq!(turns.len(), 2);
    for (i, turn) in turns.iter().enumerate() {
        assert_eq!(*turn.index(), i);
    }
    Ok(())
}

#[tokio::test]
async fn only_the_last_turns_options_are_live() -> anyhow::Result<()> {
    let mut engine = StoryEngine::new(
        ScriptedDriver::new(vec![Ok(FIRST_REPLY.into()), Ok(SECOND_REPLY.into())]),
        RecordingIllustrator::none(),
    );

    engine.start("nautical").await?;
    assert_eq!(engine.live_options().len(), 2);

    engine.choose(0).await?;
    assert_eq!(engine.live_options().len(), 3);
    assert!(engine.live_options()[0].contains("Ask about the storm"));
    Ok(())
}

#[tokio::test]
async fn choose_before_start_is_rejected_without_side_effects() {
    let mut engine = StoryEngine::new(ScriptedDriver::always(FIRST_REPLY), RecordingIllustrator::none());

    let err = engine.choose(0).await.unwrap_err();
    assert_eq!(*session_kind(&err), SessionErrorKind::NotStarted);
    assert!(engine.turns().is_empty());
    assert_eq!(engine.state().transcript().len(), 1);
}

#[tokio::test]
async fn double_start_is_rejected() -> anyhow::Result<()> {
    let mut engine = StoryEngine::new(ScriptedDriver::always(FIRST_REPLY), RecordingIllustrator::none());

    engine.start("nautical").await?;
    let err = engine.start("western").await.unwrap_err();
    assert_eq!(*session_kind(&err), SessionErrorKind::AlreadyStarted);
    assert_eq!(engine.turns().len(), 1);
    Ok(())
}

#[tokio::test]
async fn out_of_range_choice_leaves_session_unchanged() -> anyhow::Result<()> {
    let driver = ScriptedDriver::always(FIRST_REPLY);
    let mut engine = StoryEngine::new(driver, RecordingIllustrator::none());

    engine.start("nautical").await?;
    let before = engine.state().transcript().len();

    let err = engine.choose(2).await.unwrap_err();
    assert_eq!(
        *session_kind(&err),
        SessionErrorKind::InvalidChoice {
            index: 2,
            available: 2
        }
    );
    assert_eq!(engine.turns().len(), 1);
    assert_eq!(engine.state().transcript().len(), before);
    Ok(())
}

#[tokio::test]
async fn failed_cycle_commits_nothing_and_is_retryable() -> anyhow::Result<()> {
    let driver = ScriptedDriver::new(vec![
        Ok(FIRST_REPLY.into()),
        Err(GenerationErrorKind::Api {
            status: 503,
            message: "overloaded".into(),
        }),
        Ok(SECOND_REPLY.into()),
    ]);
    let mut engine = StoryEngine::new(driver, RecordingIllustrator::none());

    engine.start("nautical").await?;
    let before = engine.state().transcript().len();

    let err = engine.choose(0).await.unwrap_err();
    assert!(matches!(err.kind(), CalliopeErrorKind::Generation(_)));
    // Turn count tracks successful cycles only; the staged user message was
    // not committed either.
    assert_eq!(engine.turns().len(), 1);
    assert_eq!(engine.state().transcript().len(), before);
    assert!(!engine.is_ended());

    // The same choice simply succeeds on retry.
    let turn = engine.choose(0).await?;
    assert_eq!(*turn.index(), 1);
    assert_eq!(engine.turns().len(), 2);
    assert_eq!(engine.driver().call_count(), 3);
    Ok(())
}

#[tokio::test]
async fn ending_marker_terminates_even_with_options_present() -> anyhow::Result<()> {
    let mut engine = StoryEngine::new(
        ScriptedDriver::new(vec![Ok(FIRST_REPLY.into()), Ok(ENDING_REPLY.into())]),
        RecordingIllustrator::none(),
    );

    engine.start("nautical").await?;
    let turn = engine.choose(1).await?;

    // The terminal reply still parsed an option line, but the ending wins.
    assert!(!turn.options().is_empty());
    assert!(engine.is_ended());
    assert!(engine.live_options().is_empty());

    let err = engine.choose(0).await.unwrap_err();
    assert_eq!(*session_kind(&err), SessionErrorKind::Ended);
    assert_eq!(engine.turns().len(), 2);
    Ok(())
}

#[tokio::test]
async fn illustrator_receives_cleaned_narrative_once_per_turn() -> anyhow::Result<()> {
    let illustrator = RecordingIllustrator::none();
    let mut engine = StoryEngine::new(ScriptedDriver::always(FIRST_REPLY), illustrator);

    engine.start("nautical").await?;

    let prompts = engine.illustrator().prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("storm rolled in"));
    assert!(!prompts[0].contains("Options:"));
    assert!(!prompts[0].contains("1. Seek shelter"));
    Ok(())
}

#[tokio::test]
async fn resolved_image_is_attached_to_the_turn() -> anyhow::Result<()> {
    let source = ImageSource::Reference("https://example.com/storm.png".to_string());
    let mut engine = StoryEngine::new(
        ScriptedDriver::always(FIRST_REPLY),
        RecordingIllustrator::returning(Some(source.clone())),
    );

    let turn = engine.start("nautical").await?;
    assert_eq!(turn.image().as_ref(), Some(&source));
    Ok(())
}
