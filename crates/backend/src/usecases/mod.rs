pub mod u501_whos_first;
