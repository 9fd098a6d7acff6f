//! Lesson request parameters and prompt assembly
//!
//! `build_prompt` is a pure function of the request snapshot; identical
//! requests always assemble identical prompts.

use std::fmt;
use std::str::FromStr;

/// Grade or college level the lesson targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradeLevel {
    #[default]
    Kindergarten,
    Grade1,
    Grade2,
    Grade3,
    Grade4,
    Grade5,
    Grade6,
    Grade7,
    Grade8,
    Grade9,
    Grade10,
    Grade11,
    Grade12,
    College,
}

impl GradeLevel {
    /// All selectable levels, in presentation order
    pub const ALL: [GradeLevel; 14] = [
        GradeLevel::Kindergarten,
        GradeLevel::Grade1,
        GradeLevel::Grade2,
        GradeLevel::Grade3,
        GradeLevel::Grade4,
        GradeLevel::Grade5,
        GradeLevel::Grade6,
        GradeLevel::Grade7,
        GradeLevel::Grade8,
        GradeLevel::Grade9,
        GradeLevel::Grade10,
        GradeLevel::Grade11,
        GradeLevel::Grade12,
        GradeLevel::College,
    ];

    /// Display string used verbatim in the prompt
    pub fn as_str(&self) -> &'static str {
        match self {
            GradeLevel::Kindergarten => "Kindergarten",
            GradeLevel::Grade1 => "1st Grade",
            GradeLevel::Grade2 => "2nd Grade",
            GradeLevel::Grade3 => "3rd Grade",
            GradeLevel::Grade4 => "4th Grade",
            GradeLevel::Grade5 => "5th Grade",
            GradeLevel::Grade6 => "6th Grade",
            GradeLevel::Grade7 => "7th Grade",
            GradeLevel::Grade8 => "8th Grade",
            GradeLevel::Grade9 => "9th Grade",
            GradeLevel::Grade10 => "10th Grade",
            GradeLevel::Grade11 => "11th Grade",
            GradeLevel::Grade12 => "12th Grade",
            GradeLevel::College => "College",
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradeLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept "3", "3rd", "3rd grade" and similar spellings
        let normalized = s.trim().to_lowercase();
        let normalized = normalized.strip_suffix(" grade").unwrap_or(&normalized);
        match normalized {
            "kindergarten" | "k" => Ok(GradeLevel::Kindergarten),
            "1" | "1st" | "first" => Ok(GradeLevel::Grade1),
            "2" | "2nd" | "second" => Ok(GradeLevel::Grade2),
            "3" | "3rd" | "third" => Ok(GradeLevel::Grade3),
            "4" | "4th" | "fourth" => Ok(GradeLevel::Grade4),
            "5" | "5th" | "fifth" => Ok(GradeLevel::Grade5),
            "6" | "6th" | "sixth" => Ok(GradeLevel::Grade6),
            "7" | "7th" | "seventh" => Ok(GradeLevel::Grade7),
            "8" | "8th" | "eighth" => Ok(GradeLevel::Grade8),
            "9" | "9th" | "ninth" => Ok(GradeLevel::Grade9),
            "10" | "10th" | "tenth" => Ok(GradeLevel::Grade10),
            "11" | "11th" | "eleventh" => Ok(GradeLevel::Grade11),
            "12" | "12th" | "twelfth" => Ok(GradeLevel::Grade12),
            "college" => Ok(GradeLevel::College),
            _ => Err(format!("Unknown grade level: '{}'. Use kindergarten, 1st grade .. 12th grade, or college", s)),
        }
    }
}

/// How thorough the generated plan should be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailLevel {
    #[default]
    Detailed,
    SemiDetailed,
}

impl DetailLevel {
    /// Display string used verbatim in the prompt
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailLevel::Detailed => "Detailed Lesson Plan",
            DetailLevel::SemiDetailed => "Semi-Detailed Lesson Plan",
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetailLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "detailed" | "detailed lesson plan" | "full" => Ok(DetailLevel::Detailed),
            "semi-detailed" | "semi" | "semi-detailed lesson plan" => Ok(DetailLevel::SemiDetailed),
            _ => Err(format!("Unknown detail level: '{}'. Use detailed or semi-detailed", s)),
        }
    }
}

/// How long the lesson runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LessonDuration {
    #[default]
    Minutes30To60,
    Minutes60To90,
    Minutes90To120,
    Hours2To3,
}

impl LessonDuration {
    /// Display string used verbatim in the prompt
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonDuration::Minutes30To60 => "30-60 minutes",
            LessonDuration::Minutes60To90 => "60-90 minutes",
            LessonDuration::Minutes90To120 => "90-120 minutes",
            LessonDuration::Hours2To3 => "2-3 hours",
        }
    }
}

impl fmt::Display for LessonDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LessonDuration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "30-60 minutes" | "30-60" => Ok(LessonDuration::Minutes30To60),
            "60-90 minutes" | "60-90" => Ok(LessonDuration::Minutes60To90),
            "90-120 minutes" | "90-120" => Ok(LessonDuration::Minutes90To120),
            "2-3 hours" | "2-3" => Ok(LessonDuration::Hours2To3),
            _ => Err(format!(
                "Unknown duration: '{}'. Use 30-60, 60-90, 90-120 minutes, or 2-3 hours",
                s
            )),
        }
    }
}

/// Student background knowledge on the topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundKnowledge {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl BackgroundKnowledge {
    /// Display string used verbatim in the prompt
    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundKnowledge::Beginner => "Beginner",
            BackgroundKnowledge::Intermediate => "Intermediate",
            BackgroundKnowledge::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for BackgroundKnowledge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackgroundKnowledge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(BackgroundKnowledge::Beginner),
            "intermediate" => Ok(BackgroundKnowledge::Intermediate),
            "advanced" => Ok(BackgroundKnowledge::Advanced),
            _ => Err(format!(
                "Unknown background knowledge level: '{}'. Use beginner, intermediate, or advanced",
                s
            )),
        }
    }
}

/// Immutable snapshot of one submission's parameters
///
/// The topic is stored already clamped to the 200 character limit (see
/// [`crate::guard`]); this type never truncates on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonRequest {
    pub topic: String,
    pub grade_level: GradeLevel,
    pub detail_level: DetailLevel,
    pub duration: LessonDuration,
    pub background: BackgroundKnowledge,
}

impl Default for LessonRequest {
    fn default() -> Self {
        Self {
            topic: String::new(),
            grade_level: GradeLevel::default(),
            detail_level: DetailLevel::default(),
            duration: LessonDuration::default(),
            background: BackgroundKnowledge::default(),
        }
    }
}

/// Assemble the natural-language prompt for one request
///
/// Pure and deterministic. Always returns a non-empty string; a blank topic
/// falls back to an unconstrained phrasing that lets the model pick the
/// subject.
pub fn build_prompt(request: &LessonRequest) -> String {
    let opening = match request.detail_level {
        DetailLevel::Detailed => "Please create a complete and",
        DetailLevel::SemiDetailed => "Please create a",
    };
    let objectives = match request.detail_level {
        DetailLevel::Detailed => "specific",
        DetailLevel::SemiDetailed => "general",
    };
    let tail = match request.detail_level {
        DetailLevel::Detailed => {
            "teaching strategies that engage students in the learning process, \
             materials needed for the lesson, including any technology, books, or other resources \
             that will be used, a detailed timeline for each activity, including estimated times \
             for each part of the lesson, and assessment methods to evaluate student learning, \
             such as quizzes, tests, or class participation. Please draw on your expertise in \
             teaching experience in the subject area to create an effective and engaging lesson plan."
        }
        DetailLevel::SemiDetailed => {
            "a basic description of teaching strategies and assessment methods. Please draw on \
             your expertise in teaching experience in the subject area to create an effective and \
             engaging lesson plan."
        }
    };

    let plan_kind = request.detail_level.as_str();
    let grade = request.grade_level.as_str();
    let duration = request.duration.as_str();
    let background = request.background.as_str();

    let topic = request.topic.trim();
    if topic.is_empty() {
        format!(
            "{opening} {plan_kind}, appropriate for {grade} students, that is {duration} in \
             duration. The student's background knowledge is at a {background} level. Please \
             include {objectives} learning objectives that are achievable and measurable, a list \
             of materials needed, and {tail}"
        )
    } else {
        format!(
            "{opening} {plan_kind} for a {topic} lesson, appropriate for {grade} students, that \
             is {duration} in duration. The student's background knowledge is at a {background} \
             level. Please include {objectives} learning objectives that are achievable and \
             measurable, {tail}"
        )
    }
}
