//! Built-in sign catalog.

use super::SignSpec;

/// (word, description, category, usage)
const SIGNS: &[(&str, &str, &str, &str)] = &[
    // Greetings
    ("HELLO", "Right hand flat, fingers together, thumb up. Move hand from forehead outward in a small arc.", "Greetings", "Use when meeting someone"),
    ("HI", "Similar to HELLO but with smaller movement. Hand starts near temple.", "Greetings", "Casual greeting"),
    ("WELCOME", "Both hands open, palms up. Move hands toward body in inviting motion.", "Greetings", "Welcoming someone"),
    ("GOODBYE", "Open hand facing out, fingers fold down and up twice.", "Greetings", "Leaving or ending a conversation"),
    // Politeness
    ("THANKYOU", "Right hand flat, fingers together. Touch fingers to chin then move forward and downward.", "Politeness", "Express gratitude"),
    ("PLEASE", "Open right hand, palm facing chest. Make circular motion on chest.", "Politeness", "Making a request politely"),
    ("SORRY", "Make 'A' handshape (fist with thumb up). Rub in circular motion on chest.", "Politeness", "Apologizing for something"),
    ("EXCUSEME", "Fingertips of one hand brush across the flat palm of the other hand.", "Politeness", "Getting attention politely"),
    // Responses
    ("YES", "Make 'S' handshape (fist). Move up and down like nodding head.", "Responses", "Affirmative response"),
    ("NO", "First two fingers extended, thumb over other fingers. Snap fingers together.", "Responses", "Negative response"),
    ("OK", "Make 'O' with thumb and index finger, other fingers extended. Move hand slightly.", "Responses", "Agreement or understanding"),
    // Needs
    ("HELP", "Thumb-up hand on flat palm of other hand. Lift upward together.", "Needs", "Asking for assistance"),
    ("NEED", "Bent index finger, other fingers extended. Pull toward chest twice.", "Needs", "Expressing requirement"),
    ("WANT", "Both hands claw-shaped, palms up. Pull toward chest.", "Needs", "Expressing desire"),
    ("WATER", "W handshape (index, middle, ring fingers up). Tap on chin.", "Needs", "Asking for water"),
    ("FOOD", "Flat hand, fingers together. Touch fingers to mouth.", "Needs", "Asking for food"),
    ("BATHROOM", "T handshape (thumb between index and middle). Shake side to side.", "Needs", "Need to use restroom"),
    // Actions
    ("EAT", "Flat hand, bring to mouth as if putting food in.", "Actions", "To consume food"),
    ("DRINK", "C handshape. Bring to mouth as if drinking.", "Actions", "To consume liquid"),
    ("SLEEP", "Open hand in front of face, pull down as eyes closing.", "Actions", "Going to sleep"),
    ("GO", "Both index fingers point forward then move away from body.", "Actions", "Leaving for somewhere"),
    ("COME", "Index fingers beckon toward self.", "Actions", "Asking someone to approach"),
    ("SEE", "V-fingers move forward from the eyes.", "Actions", "Seeing something"),
    ("LOOK", "V-fingers point from the eyes toward the object.", "Actions", "Directing attention"),
    ("KNOW", "Fingertips of flat hand tap the forehead.", "Actions", "Stating knowledge"),
    ("UNDERSTAND", "Index finger flicks up beside the forehead from a closed fist.", "Actions", "Confirming comprehension"),
    ("THINK", "Index finger touches the temple.", "Actions", "Expressing a thought"),
    ("FEEL", "Middle finger brushes up the chest.", "Actions", "Describing a feeling"),
    // People
    ("I", "Point index finger to chest.", "People", "Referring to oneself"),
    ("YOU", "Point index finger forward at person.", "People", "Referring to other person"),
    ("ME", "Point to self with index finger.", "People", "Referring to self"),
    ("MY", "Flat hand placed on chest.", "People", "Showing possession"),
    ("HE", "Point to the side, at the male referent.", "People", "Referring to a man"),
    ("SHE", "Point to the side, at the female referent.", "People", "Referring to a woman"),
    ("WE", "Index finger touches one shoulder then arcs to the other.", "People", "Referring to a group including oneself"),
    ("THEY", "Index finger sweeps across several points to the side.", "People", "Referring to others"),
    ("FRIEND", "Hook index fingers together, pull apart and back together.", "People", "Referring to friend"),
    ("DOCTOR", "D handshape taps the inside of the wrist where the pulse is.", "People", "Referring to a doctor"),
    // Family
    ("MOTHER", "Thumb of open hand touches chin.", "Family", "Referring to mother"),
    ("FATHER", "Thumb of open hand touches forehead.", "Family", "Referring to father"),
    ("FAMILY", "Both F hands circle outward and meet, palms facing in.", "Family", "Referring to family"),
    // Questions
    ("WHAT", "Both hands open, palms up. Shake slightly side to side.", "Questions", "Asking for information"),
    ("WHERE", "Index finger extended, shake side to side.", "Questions", "Asking about location"),
    ("WHEN", "Index finger extended, make small circles.", "Questions", "Asking about time"),
    ("WHY", "Y handshape (thumb and pinky extended). Touch to forehead then pull away.", "Questions", "Asking for reason"),
    ("HOW", "Both hands, palms up, fingers touching. Rotate upward.", "Questions", "Asking about manner"),
    ("WHO", "Make 'L' shape with thumb and index. Circle near mouth.", "Questions", "Asking about person"),
    // Time
    ("NOW", "Both Y hands (thumb and pinky). Move downward quickly.", "Time", "At this moment"),
    ("TODAY", "Y hand touches chin then moves down.", "Time", "This day"),
    ("TOMORROW", "A handshape (thumb on side of chin). Move forward.", "Time", "Next day"),
    ("YESTERDAY", "Y handshape, thumb touches cheek then moves back over shoulder.", "Time", "Previous day"),
    ("TIME", "Index finger taps back of wrist where watch would be.", "Time", "Asking or telling time"),
    // Emotions
    ("HAPPY", "Both hands brush upward on chest twice with smiling expression.", "Emotions", "Feeling joy"),
    ("SAD", "Both hands move downward in front of face with sad expression.", "Emotions", "Feeling sorrow"),
    ("ANGRY", "Claw hands at chest, pulling outward with angry expression.", "Emotions", "Feeling anger"),
    ("SCARED", "Both hands clawed, shake in front of chest with wide eyes.", "Emotions", "Feeling fear"),
    ("LOVE", "Cross arms over chest, hands in fists.", "Emotions", "Feeling love"),
    // Health
    ("PAIN", "Index fingers point at each other and twist in opposite directions.", "Health", "Describing pain"),
    ("HURT", "Index fingers point at each other and twist near the painful spot.", "Health", "Describing an injury"),
    ("SICK", "Middle fingers touch the forehead and the stomach.", "Health", "Feeling unwell"),
    // Places
    ("HOME", "Flat hand touches cheek then moves to flat palm position.", "Places", "Referring to home"),
    ("SCHOOL", "Clap hands together twice (like teacher getting attention).", "Places", "Referring to school"),
    ("WORK", "S handshape (fist) pounds on back of other S hand.", "Places", "Referring to workplace"),
    ("HOSPITAL", "H handshape (index and middle fingers extended) on wrist pulse.", "Places", "Referring to hospital"),
    ("STORE", "Both hands, palms up. Move back and forth as if exchanging money.", "Places", "Referring to store"),
];

const NUMBER_SIGNS: [&str; 10] = [
    "Index finger extended upward",
    "Index and middle fingers extended upward (peace sign)",
    "Index, middle, and ring fingers extended upward",
    "All fingers except thumb extended upward",
    "All five fingers extended upward",
    "Thumb and pinky extended (like phone gesture)",
    "Thumb touches middle finger, other fingers extended",
    "Thumb touches ring finger, other fingers extended",
    "Thumb touches pinky, other fingers extended",
    "Thumb up, shake side to side",
];

pub(super) fn catalog() -> Vec<SignSpec> {
    let words = SIGNS.iter().map(|(word, description, category, usage)| SignSpec {
        word: word.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        usage: usage.to_string(),
        display_key: None,
    });

    let numbers = NUMBER_SIGNS
        .iter()
        .enumerate()
        .map(|(i, description)| SignSpec {
            word: (i + 1).to_string(),
            description: description.to_string(),
            category: "Numbers".to_string(),
            usage: format!("Number {}", i + 1),
            display_key: None,
        });

    words.chain(numbers).collect()
}
