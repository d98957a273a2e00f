use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn introscore() -> Command {
    cargo_bin_cmd!("introscore")
}

/// Rubric sheet mirroring the standard evaluation rubric
pub const RUBRIC_CSV: &str = "\
Intern Evaluation Sheet,,
Overall Rubrics,,
Content,\"Salutation, required info, narrative flow\",40
Delivery,Speech rate (words per minute),10
Language,Grammar errors per 100 words,20
Clarity,Filler Word rate,15
Engagement,Sentiment / positivity of delivery,15
";

pub const TRANSCRIPT: &str = "Hello everyone! My name is Ben and I am twelve years old. \
I study in sixth grade at the city school. I live with my parents and my sister. \
My hobby is reading and I love football. My dream is to become a doctor. \
One thing about me is that I am very curious. Thank you for listening!";

#[allow(dead_code)]
pub fn write_rubric(dir: &Path) -> PathBuf {
    let path = dir.join("rubric.csv");
    fs::write(&path, RUBRIC_CSV).expect("write rubric");
    path
}

#[allow(dead_code)]
pub fn write_transcript(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("transcript.txt");
    fs::write(&path, content).expect("write transcript");
    path
}
