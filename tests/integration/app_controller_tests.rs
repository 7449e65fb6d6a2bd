/*!
 * Tests for the application controller with scripted speech
 */

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::common;
use echosign::app_config::Config;
use echosign::app_controller::Controller;
use echosign::playback::{ChannelObserver, PlaybackEvent, PlaybackObserver, PlaybackState};
use echosign::resolver::MatchKind;
use echosign::speech::ScriptedSpeechSource;

fn test_config() -> Config {
    let mut config = Config::default();
    config.playback.interval_ms = 100;
    config
}

fn observed_controller(config: Config) -> (Controller, UnboundedReceiver<PlaybackEvent>) {
    common::init_logging();
    let (observer, events) = ChannelObserver::new();
    let observer: Arc<dyn PlaybackObserver> = Arc::new(observer);
    let controller = Controller::with_observers(config, vec![observer]).unwrap();
    (controller, events)
}

fn count_stopped(events: &[PlaybackEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, PlaybackEvent::Stopped { .. }))
        .count()
}

fn count_complete(events: &[PlaybackEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, PlaybackEvent::Complete { .. }))
        .count()
}

#[tokio::test(start_paused = true)]
async fn test_play_withSentence_shouldPlayEverySignToCompletion() {
    let (controller, mut events) = observed_controller(test_config());

    let translation = controller.play("Where is the bathroom").await.unwrap();
    assert_eq!(translation.gloss.tokens(), &["WHERE", "BATHROOM"]);

    let received = common::drain_events(&mut events);
    assert_eq!(common::played_tokens(&received), vec!["WHERE", "BATHROOM"]);
    assert_eq!(count_complete(&received), 1);
    assert_eq!(
        controller.sequencer().snapshot().state,
        PlaybackState::Complete
    );
}

#[tokio::test(start_paused = true)]
async fn test_play_withNothingToSign_shouldNotStartPlayback() {
    let (controller, mut events) = observed_controller(test_config());

    let translation = controller.play("?!").await.unwrap();
    assert!(translation.is_empty());
    assert!(common::drain_events(&mut events).is_empty());
    assert_eq!(controller.sequencer().snapshot().state, PlaybackState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_play_withAutoplayDisabled_shouldOnlyTranslate() {
    let mut config = test_config();
    config.playback.autoplay = false;
    let (controller, mut events) = observed_controller(config);

    let translation = controller.play("Thank you for your help").await.unwrap();
    assert_eq!(translation.gloss.tokens(), &["THANKYOU", "HELP"]);
    assert!(common::drain_events(&mut events).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_listen_withBackToBackUtterances_shouldInterruptPreviousOne() {
    let (controller, mut events) = observed_controller(test_config());
    let mut source = ScriptedSpeechSource::new(["hello", "where is the bathroom", "thank you"]);

    let handled = controller.listen(&mut source).await.unwrap();
    assert_eq!(handled, 3);
    assert_eq!(source.remaining(), 0);

    let received = common::drain_events(&mut events);
    assert_eq!(
        common::played_tokens(&received),
        vec!["HELLO", "WHERE", "THANKYOU"]
    );
    assert_eq!(count_stopped(&received), 2);
    assert_eq!(count_complete(&received), 1);
}

#[tokio::test(start_paused = true)]
async fn test_listen_withEmptySource_shouldHandleNothing() {
    let (controller, mut events) = observed_controller(test_config());
    let mut source = ScriptedSpeechSource::default();

    assert_eq!(controller.listen(&mut source).await.unwrap(), 0);
    assert!(common::drain_events(&mut events).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_stop_duringPlayback_shouldCancelRun() {
    let (controller, mut events) = observed_controller(test_config());

    controller.begin("where is the bathroom").await.unwrap();
    controller.stop().await.unwrap();
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;

    let received = common::drain_events(&mut events);
    assert_eq!(common::played_tokens(&received), vec!["WHERE"]);
    assert_eq!(count_stopped(&received), 1);
    assert_eq!(count_complete(&received), 0);
}

#[tokio::test]
async fn test_with_config_withVocabularyFile_shouldUseIt() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    let path = common::create_test_vocabulary(dir.path())?;
    let config = Config {
        vocabulary_path: Some(path),
        ..test_config()
    };

    let controller = Controller::with_config(config)?;
    let translation = controller.translate("chai");
    assert_eq!(translation.resolved[0].match_kind, MatchKind::Alias);
    assert!(controller.translator().resolver().lexicon().signs.contains("GOODMORNING"));
    Ok(())
}

#[tokio::test]
async fn test_with_config_withInvalidVocabulary_shouldFail() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    let path = common::create_test_file(dir.path(), "vocabulary.json", "{ \"signs\": 5 }")?;
    let config = Config {
        vocabulary_path: Some(path),
        ..test_config()
    };

    let Err(error) = Controller::with_config(config) else {
        panic!("invalid vocabulary was accepted");
    };
    assert!(error.to_string().contains("Failed to load vocabulary"));
    Ok(())
}

#[tokio::test]
async fn test_with_config_withZeroInterval_shouldFail() {
    let mut config = test_config();
    config.playback.interval_ms = 0;
    assert!(Controller::with_config(config).is_err());
}

#[tokio::test]
async fn test_with_config_shouldApplyCacheSetting() {
    let controller = Controller::with_config(test_config()).unwrap();
    assert!(controller.translator().resolver().cache().is_some());

    let mut config = test_config();
    config.resolver.cache_enabled = false;
    let controller = Controller::with_config(config).unwrap();
    assert!(controller.translator().resolver().cache().is_none());
}
