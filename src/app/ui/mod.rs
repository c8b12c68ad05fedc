mod list;
mod panels;
mod search;
