pub mod niobium;
