mod announce;
