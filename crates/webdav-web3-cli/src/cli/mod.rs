/*
[INPUT]:  Interactive terminal input
[OUTPUT]: Configuration files and prompted secrets
[POS]:    CLI layer - interactive helpers for the binary
[UPDATE]: When adding interactive flows
*/

pub mod init;
pub mod prompt;
