pub mod outcome;
pub mod playback;
pub mod puzzle;
pub mod track;
