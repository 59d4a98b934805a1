mod documents;
mod scenarios;
