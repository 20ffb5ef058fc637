mod answer;
mod exchange;
