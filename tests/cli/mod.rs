mod duplicates;
mod entries;
mod errors;
mod init;
mod search;
mod transfer;
