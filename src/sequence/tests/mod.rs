#![cfg(test)]

mod grid;
mod group;
mod index;
mod window;
