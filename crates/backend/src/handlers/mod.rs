// UseCase handlers
pub mod u501_whos_first;
